//! HTML markup for the widgets, built from plain state.
//!
//! Everything here is DOM free so it can be checked natively; `crate::page`
//! pushes the strings into the document. Interactive elements carry a
//! `data-action` attribute which the page's delegated click handler reads.

use crate::perf::PerfOption;
use crate::quiz::{
    ChallengeItem, Marker, Phase, QuizDefinition, QuizSession, Selection, Verdict,
};
use crate::skills::{RING_RADIUS as SKILL_RING_RADIUS, Skill};

// --- Helpers -----------------------------------------------------------------

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * std::f64::consts::PI * radius
}

/// Stroke dash offset that leaves `percent` of a ring drawn.
pub fn dash_offset(percent: f64, radius: f64) -> f64 {
    let c = circumference(radius);
    c - (percent.clamp(0.0, 100.0) / 100.0) * c
}

/// Inline style for an SVG ring drawn up to `offset`, optionally tinted.
pub fn ring_style(offset: f64, radius: f64, stroke: Option<&str>) -> String {
    let mut style = format!(
        "stroke-dasharray:{};stroke-dashoffset:{}",
        circumference(radius),
        offset
    );
    if let Some(color) = stroke {
        style.push_str(&format!(";stroke:{}", color));
    }
    style
}

/// Escape `code` and wrap the first occurrence of `highlight` in a span.
pub fn highlighted_code(code: &str, highlight: Option<&str>, class: &str) -> String {
    match highlight.filter(|h| !h.is_empty()).and_then(|h| code.find(h).map(|at| (at, h))) {
        Some((at, h)) => format!(
            "{}<span class=\"{}\">{}</span>{}",
            escape_html(&code[..at]),
            class,
            escape_html(h),
            escape_html(&code[at + h.len()..])
        ),
        None => escape_html(code),
    }
}

// --- Quiz panels -------------------------------------------------------------

/// Everything needed to draw one quiz panel.
pub struct QuizView<'a> {
    /// CSS class prefix of the panel (`bug`, `myth`).
    pub prefix: &'a str,
    pub definition: &'a QuizDefinition,
    pub session: &'a QuizSession,
    /// Verdict of the answer currently on screen, if any.
    pub last: Option<&'a Verdict>,
}

pub fn quiz_markup(view: &QuizView) -> String {
    match view.session.phase() {
        Phase::Complete => summary_markup(view),
        Phase::Presenting(i) => item_markup(view, i, None),
        Phase::Answered(i) => {
            let verdict = view.last.filter(|v| v.item == i);
            item_markup(view, i, verdict)
        }
    }
}

fn progress_markup(prefix: &str, markers: &[Marker]) -> String {
    let dots: String = markers
        .iter()
        .map(|m| {
            let state = match m {
                Marker::Pending => "",
                Marker::Current => " current",
                Marker::AnsweredCorrect => " done-correct",
                Marker::AnsweredIncorrect => " done-wrong",
            };
            format!("<div class=\"{prefix}-dot{state}\"></div>")
        })
        .collect();
    format!("<div class=\"{prefix}-progress\">{dots}</div>")
}

/// Extra classes for a choice button once the item has been answered.
fn choice_classes(choice: Selection, verdict: Option<&Verdict>) -> &'static str {
    match verdict {
        Some(v) if v.expected == choice => " correct",
        Some(v) if v.selected == choice && !v.correct => " wrong",
        _ => "",
    }
}

fn item_markup(view: &QuizView, idx: usize, verdict: Option<&Verdict>) -> String {
    let p = view.prefix;
    let answered = view.session.phase() == Phase::Answered(idx);
    let disabled = if answered { " disabled" } else { "" };
    let mut html = progress_markup(p, &view.session.progress_markers());

    match &view.session.items()[idx] {
        ChallengeItem::MultipleChoice(mc) => {
            if let Some(code) = &mc.code {
                html.push_str(&format!(
                    "<div class=\"{p}-code\">{}</div>",
                    highlighted_code(code, mc.highlight.as_deref(), &format!("{p}-highlight"))
                ));
            }
            html.push_str(&format!(
                "<p class=\"{p}-question\">{}</p>",
                escape_html(&mc.prompt)
            ));
            html.push_str(&format!("<div class=\"{p}-options\">"));
            for (i, opt) in mc.options.iter().enumerate() {
                html.push_str(&format!(
                    "<button class=\"{p}-option{}\" data-action=\"answer\" data-idx=\"{i}\"{disabled}>{}</button>",
                    choice_classes(Selection::Option(i), verdict),
                    escape_html(&opt.label)
                ));
            }
            html.push_str("</div>");
        }
        ChallengeItem::Boolean(b) => {
            html.push_str(&format!(
                "<p class=\"{p}-statement\">\"{}\"</p>",
                escape_html(&b.statement)
            ));
            html.push_str(&format!("<div class=\"{p}-buttons\">"));
            for (answer, label) in [(true, "True"), (false, "False")] {
                html.push_str(&format!(
                    "<button class=\"{p}-btn{}\" data-action=\"answer\" data-answer=\"{answer}\"{disabled}>{label}</button>",
                    choice_classes(Selection::Boolean(answer), verdict)
                ));
            }
            html.push_str("</div>");
        }
    }

    if answered {
        let correct = view.session.outcomes().get(idx).copied().unwrap_or(false);
        let (class, lead) = if correct {
            ("success", "Correct! ")
        } else {
            ("error", "Not quite. ")
        };
        let explanation = view.session.items()[idx].explanation().unwrap_or("");
        html.push_str(&format!(
            "<div class=\"{p}-feedback {class}\">{}{}</div>",
            lead,
            escape_html(explanation)
        ));
        let label = if view.session.is_last_item() {
            "See Results"
        } else {
            view.definition.next_label.as_str()
        };
        html.push_str(&format!(
            "<button class=\"{p}-next-btn\" data-action=\"next\">{}</button>",
            escape_html(label)
        ));
    }
    html
}

fn summary_markup(view: &QuizView) -> String {
    let p = view.prefix;
    let Ok(summary) = view.session.summary() else {
        return String::new();
    };
    format!(
        "<div class=\"{p}-score\"><h4>{} / {} Correct</h4><p class=\"{p}-percent\">{}%</p><p>{}</p><button class=\"{p}-restart-btn\" data-action=\"restart\">Play Again</button></div>",
        summary.score,
        summary.total,
        summary.percent(),
        escape_html(view.definition.messages.for_tier(summary.tier))
    )
}

// --- Skills & performance ----------------------------------------------------

/// Tile button for one skill. The ring starts empty; the page fills it on reveal.
pub fn skill_tile_markup(skill: &Skill) -> String {
    format!(
        "<svg class=\"skill-ring\" viewBox=\"0 0 56 56\">\
<circle cx=\"28\" cy=\"28\" r=\"24\" class=\"skill-ring-bg\"/>\
<circle cx=\"28\" cy=\"28\" r=\"24\" class=\"skill-ring-fill\" style=\"{}\"/>\
</svg>\
<div class=\"skill-name\">{}</div>\
<div class=\"skill-level\">{}%</div>",
        ring_style(circumference(SKILL_RING_RADIUS), SKILL_RING_RADIUS, None),
        escape_html(skill.name),
        skill.level
    )
}

pub fn perf_toggle_markup(idx: usize, opt: &PerfOption) -> String {
    let label = escape_html(opt.label);
    format!(
        "<div><div class=\"perf-toggle-label\">{label}</div>\
<div class=\"perf-toggle-points\">+{} points</div></div>\
<label class=\"switch\"><input type=\"checkbox\" data-idx=\"{idx}\" aria-label=\"{label}\" title=\"{}\">\
<span class=\"switch-slider\"></span></label>",
        opt.points,
        escape_html(opt.tip)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{bug_hunt, web_myths};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & 'Jerry'</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_highlighted_code_wraps_first_match() {
        let html = highlighted_code("a + b + <c>", Some("+"), "bug-highlight");
        assert_eq!(
            html,
            "a <span class=\"bug-highlight\">+</span> b + &lt;c&gt;"
        );
        assert_eq!(highlighted_code("x<y", Some("zz"), "h"), "x&lt;y");
    }

    #[test]
    fn test_dash_offset_bounds() {
        let c = circumference(10.0);
        assert!((dash_offset(0.0, 10.0) - c).abs() < 1e-9);
        assert!(dash_offset(100.0, 10.0).abs() < 1e-9);
        assert!(dash_offset(150.0, 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_ring_style_applies_offset_and_tint() {
        let c = circumference(24.0);
        assert_eq!(
            ring_style(c, 24.0, None),
            format!("stroke-dasharray:{c};stroke-dashoffset:{c}")
        );
        assert!(
            ring_style(0.0, 24.0, Some("#c8ff00")).ends_with(";stroke-dashoffset:0;stroke:#c8ff00")
        );
    }

    #[test]
    fn test_skill_tile_starts_empty() {
        let skill = &crate::skills::SKILLS[0];
        let html = skill_tile_markup(skill);
        let c = circumference(SKILL_RING_RADIUS);
        assert!(html.contains(&format!("stroke-dashoffset:{c}\"")));
        assert!(html.contains(&format!("{}%</div>", skill.level)));
    }

    #[test]
    fn test_presenting_markup_has_enabled_options() {
        let def = bug_hunt();
        let session = def.start().unwrap();
        let html = quiz_markup(&QuizView {
            prefix: "bug",
            definition: &def,
            session: &session,
            last: None,
        });
        assert!(html.contains("bug-dot current"));
        assert_eq!(html.matches("data-action=\"answer\"").count(), 3);
        assert!(!html.contains("disabled"));
        assert!(html.contains("<span class=\"bug-highlight\">100%</span>"));
    }

    #[test]
    fn test_answered_markup_marks_choices() {
        let def = web_myths();
        let mut session = def.start().unwrap();
        // first myth is false
        let verdict = session.submit_answer(Selection::Boolean(true)).unwrap();
        let html = quiz_markup(&QuizView {
            prefix: "myth",
            definition: &def,
            session: &session,
            last: Some(&verdict),
        });
        assert!(html.contains(
            "myth-btn wrong\" data-action=\"answer\" data-answer=\"true\" disabled"
        ));
        assert!(html.contains(
            "myth-btn correct\" data-action=\"answer\" data-answer=\"false\" disabled"
        ));
        assert!(html.contains("myth-feedback error\">Not quite. "));
        assert!(html.contains(">Next Statement</button>"));
        assert!(html.contains("myth-dot done-wrong"));
    }

    #[test]
    fn test_summary_markup_uses_tier_message() {
        let def = web_myths();
        let mut session = def.start().unwrap();
        for item in def.items.iter() {
            if let ChallengeItem::Boolean(b) = item {
                session.submit_answer(Selection::Boolean(b.answer));
            }
            session.advance();
        }
        let html = quiz_markup(&QuizView {
            prefix: "myth",
            definition: &def,
            session: &session,
            last: None,
        });
        assert!(html.contains("<h4>6 / 6 Correct</h4>"));
        assert!(html.contains("<p class=\"myth-percent\">100%</p>"));
        assert!(html.contains(&escape_html(&def.messages.perfect)));
        assert!(html.contains("data-action=\"restart\""));
    }
}
