//! Skill tiles: a percentage ring per skill and a detail blurb on click.

use crate::render::dash_offset;

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0..=100.
    pub level: u8,
    pub desc: &'static str,
}

/// Radius of each tile's ring (viewBox 56x56).
pub const RING_RADIUS: f64 = 24.0;

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "HTML / CSS",
        level: 90,
        desc: "Semantic markup, responsive layouts with Flexbox and Grid, Bootstrap framework. I build clean, accessible front-ends that look great on any device.",
    },
    Skill {
        name: "JavaScript",
        level: 85,
        desc: "Vanilla JS, ES6+, DOM manipulation, async patterns. I bring interactivity and dynamic behavior to every project I work on.",
    },
    Skill {
        name: "React",
        level: 80,
        desc: "Component architecture, hooks, state management. I build dynamic single-page applications like Paw Partners for real-world use cases.",
    },
    Skill {
        name: "Python",
        level: 85,
        desc: "Clean, readable code for web apps and scripting. Python is my go-to for backend logic and rapid prototyping.",
    },
    Skill {
        name: "Django",
        level: 80,
        desc: "Full-featured web framework for building robust backends. I used Django to power HobbyHotspot's community features and data layer.",
    },
    Skill {
        name: "Java",
        level: 75,
        desc: "Object-oriented programming, Spring framework fundamentals. I'm comfortable with enterprise-grade Java development.",
    },
    Skill {
        name: "Spring",
        level: 70,
        desc: "Spring Boot for RESTful APIs and backend services. A solid framework for building scalable, production-ready applications.",
    },
    Skill {
        name: "Bootstrap",
        level: 85,
        desc: "Rapid responsive design with Bootstrap's grid system and components. Great for building polished UIs quickly without reinventing the wheel.",
    },
];

impl Skill {
    /// Dash offset the ring animates to once the tile is revealed.
    pub fn ring_offset(&self) -> f64 {
        dash_offset(self.level as f64, RING_RADIUS)
    }
}

pub fn skill(idx: usize) -> Option<&'static Skill> {
    SKILLS.get(idx)
}
