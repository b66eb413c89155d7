// "Fix the Bug" quiz content.
// Four multiple-choice debugging challenges, each with a code snippet and the
// fragment to highlight inside it.
use super::{ChallengeItem, ChoiceOption, MultipleChoice, QuizDefinition, TierMessages};

fn challenge(
    code: &str,
    highlight: &str,
    prompt: &str,
    options: [(&str, bool); 3],
    explanation: &str,
) -> ChallengeItem {
    ChallengeItem::MultipleChoice(MultipleChoice {
        prompt: prompt.to_string(),
        options: options
            .iter()
            .map(|&(label, correct)| ChoiceOption::new(label, correct))
            .collect(),
        explanation: Some(explanation.to_string()),
        code: Some(code.to_string()),
        highlight: Some(highlight.to_string()),
    })
}

pub fn bug_hunt() -> QuizDefinition {
    let items = vec![
        challenge(
            "<div class=\"card\">\n  <img src=\"photo.jpg\">\n  <h2>Title</h2>\n</div>\n\n.card img {\n  width: 100%;\n  height: 100%;\n  object-fit: none;\n}",
            "100%",
            "The image is stretching and looks distorted. What should you change?",
            [
                ("object-fit: cover;", true),
                ("height: auto;", false),
                ("display: block;", false),
            ],
            "object-fit: cover ensures the image fills its container while preserving aspect ratio. 'none' applies no fitting, causing distortion when width and height are both set.",
        ),
        challenge(
            "function greet(name) {\n  const message = \n    \"Hello, \" + Name;\n  return message;\n}\n\nconsole.log(greet(\"Amanda\"));",
            "+",
            "This function throws a ReferenceError. Which fix is correct?",
            [
                ("Change Name to name (lowercase)", true),
                ("Change const to let", false),
                ("Add a semicolon after \"Hello, \"", false),
            ],
            "JavaScript is case-sensitive. The parameter is 'name' but the code references 'Name', which is undefined. Variables must match their declared casing exactly.",
        ),
        challenge(
            "<button onclick=\"submit()\">\n  Send\n</button>\n\n<script>\n  function submit() {\n    document.forms[0].submit();\n    alert(\"Sent!\");\n  }\n</script>",
            "document.forms[0].submit();",
            "The alert never fires. What's the issue?",
            [
                ("form.submit() reloads the page before alert runs", true),
                ("onclick should be onClick", false),
                ("alert() is deprecated", false),
            ],
            "Calling form.submit() causes a full page navigation, so any code after it never executes. You'd need to use AJAX/fetch or call event.preventDefault() first.",
        ),
        challenge(
            ".container {\n  display: flex;\n  justify-content: center;\n  align-items: center;\n  height: 100vh;\n}\n/* Child stays at top-left */",
            "justify-content: center;",
            "The child element stays at the top-left instead of centering. What's likely wrong?",
            [
                ("The child has position: absolute without matching coordinates", true),
                ("justify-content should be justify-items", false),
                ("height: 100vh doesn't work with flex", false),
            ],
            "If a child has position: absolute, it's removed from the flex flow and ignores the parent's flex alignment. Remove the absolute positioning or set top: 50% and left: 50% with transform to center it.",
        ),
    ];

    QuizDefinition {
        title: "Fix the Bug".to_string(),
        items,
        messages: TierMessages {
            perfect: "Perfect score! You really know your stuff.".to_string(),
            solid: "Nice work! You've got a solid foundation.".to_string(),
            developing: "Keep learning, web dev has endless depth!".to_string(),
        },
        next_label: "Next Challenge".to_string(),
    }
}
