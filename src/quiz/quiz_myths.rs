// "Web Myths" quiz content.
// Six true/false statements about the web.
use super::{BooleanStatement, ChallengeItem, QuizDefinition, TierMessages};

const MYTHS: [(&str, bool, &str); 6] = [
    (
        "Adding more meta keywords improves your Google search ranking.",
        false,
        "Google has ignored the meta keywords tag since 2009. Focus on quality content, proper semantic HTML, and useful metadata like title and description.",
    ),
    (
        "A website should load in under 3 seconds for optimal user retention.",
        true,
        "Studies show 53% of mobile users abandon a site that takes over 3 seconds to load. Google also uses page speed as a ranking factor.",
    ),
    (
        "HTTPS only matters for e-commerce sites that handle payments.",
        false,
        "HTTPS is essential for all websites. It protects user data, prevents tampering, is a Google ranking signal, and is required for many modern browser features.",
    ),
    (
        "CSS Grid and Flexbox can be used together in the same layout.",
        true,
        "They complement each other. Grid is great for 2D page layouts, while Flexbox excels at 1D alignment within components. Most modern sites use both.",
    ),
    (
        "JavaScript frameworks are always better than vanilla JS for web projects.",
        false,
        "Frameworks add overhead and complexity. For simple sites, vanilla JS is faster to load and easier to maintain. Choose frameworks when the project's complexity justifies it.",
    ),
    (
        "Alt text on images helps both accessibility and SEO.",
        true,
        "Screen readers use alt text to describe images to visually impaired users, and search engines use it to understand image content for indexing.",
    ),
];

pub fn web_myths() -> QuizDefinition {
    QuizDefinition {
        title: "Web Myths".to_string(),
        items: MYTHS
            .iter()
            .map(|&(statement, answer, explanation)| {
                ChallengeItem::Boolean(BooleanStatement {
                    statement: statement.to_string(),
                    answer,
                    explanation: explanation.to_string(),
                })
            })
            .collect(),
        messages: TierMessages {
            perfect: "You're a web expert!".to_string(),
            solid: "Solid knowledge, you know the web well.".to_string(),
            developing: "The web is full of surprises. Keep exploring!".to_string(),
        },
        next_label: "Next Statement".to_string(),
    }
}
