//! Keyword answer table.
//!
//! An ordered list of keyword rules with canned answers. Order is
//! significant: when two rules match the same number of keywords, the earlier
//! one wins.

/// Answer returned when no rule matches.
pub const DEFAULT_ANSWER: &str = "I don't have specific information about that. Please contact Hrishikesh directly for more detailed information, or try asking something about his skills, projects, or services!";

/// A set of keywords and the canned answer they trigger.
///
/// The only constructor is [`KeywordRule::new`], so keywords are always
/// lower-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    keywords: Vec<String>,
    answer: String,
}

impl KeywordRule {
    /// Build a rule. Keywords are stored lower-cased.
    pub fn new<I, S>(keywords: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            answer: answer.into(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Number of keywords occurring as substrings of an already lower-cased
    /// question.
    pub fn score(&self, lower_question: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| lower_question.contains(k.as_str()))
            .count()
    }
}

/// Ordered rules plus the fallback answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
    default_answer: String,
}

impl KeywordTable {
    pub fn new(rules: Vec<KeywordRule>, default_answer: impl Into<String>) -> Self {
        Self {
            rules,
            default_answer: default_answer.into(),
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn default_answer(&self) -> &str {
        &self.default_answer
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for KeywordTable {
    /// The site's built-in table.
    fn default() -> Self {
        Self::new(builtin_rules(), DEFAULT_ANSWER)
    }
}

fn builtin_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(
            ["hello", "hi", "hey", "greetings"],
            "Hey there! I'm Hrishikesh's AI assistant. How can I help you today? You can ask me about Hrishikesh's skills, experience, or projects!",
        ),
        KeywordRule::new(
            ["name", "who are you", "what's your name"],
            "I'm Hrishikesh's AI assistant. I'm here to help answer questions about Hrishikesh, his skills, and his services!",
        ),
        KeywordRule::new(
            ["contact", "email", "reach", "hire"],
            "You can contact Hrishikesh via email at rishiiicreates@gmail.com or through any of the social media platforms listed in the Contact section.",
        ),
        KeywordRule::new(
            ["skills", "expertise", "what can you do", "capabilities", "languages"],
            "Hrishikesh is passionate about Web 3.0, AI, and app development. He's skilled in JavaScript, TypeScript, React, Next.js, Node.js, and Data Structures and Algorithms (DSA). As he says, 'AI is cool I guess.'",
        ),
        KeywordRule::new(
            ["projects", "portfolio", "work", "experience"],
            "Hrishikesh has worked on various projects showcased in the Projects section. Each project highlights different skills and technologies. Feel free to check them out for a better understanding of his work!",
        ),
        KeywordRule::new(
            ["web 3.0", "web3", "blockchain", "crypto", "nft"],
            "Hrishikesh is passionate about Web 3.0 technologies. He's exploring blockchain applications, decentralized apps, and the future of the internet. Ask him about his projects in this exciting space!",
        ),
        KeywordRule::new(
            ["ai", "artificial intelligence", "machine learning", "ml"],
            "AI is a major interest for Hrishikesh. As he puts it, 'AI is cool I guess.' He's exploring AI applications in web development and building tools that leverage machine learning capabilities.",
        ),
        KeywordRule::new(
            ["app", "application", "mobile", "development", "software"],
            "App development is one of Hrishikesh's core skills. He creates seamless, user-friendly applications with modern tech stacks and focuses on delivering exceptional user experiences across platforms.",
        ),
        KeywordRule::new(
            ["calculator", "math", "calculate"],
            "Hrishikesh can certainly build a calculator application! His experience with JavaScript and interactive UIs makes creating calculators and other utility applications straightforward. He focuses on clean code and an intuitive user experience in all his projects.",
        ),
        KeywordRule::new(
            ["design", "ui", "ux", "user interface", "user experience", "figma"],
            "Hrishikesh has a strong eye for design. He's proficient with Figma and creates intuitive, beautiful user interfaces. His UI/UX work combines aesthetic appeal with functionality, ensuring that applications are both visually appealing and easy to use.",
        ),
        KeywordRule::new(
            ["javascript", "js", "typescript", "ts"],
            "JavaScript and TypeScript are among Hrishikesh's core skills. He uses these languages to create dynamic, interactive web applications with clean, maintainable code. His TypeScript expertise helps him build more robust applications with fewer bugs.",
        ),
        KeywordRule::new(
            ["react", "next.js", "nextjs", "frontend", "front-end"],
            "Hrishikesh specializes in React and Next.js for frontend development. He creates responsive, interactive user interfaces with these technologies, leveraging their capabilities for efficient state management, routing, and performance optimization.",
        ),
        KeywordRule::new(
            ["node", "node.js", "nodejs", "backend", "back-end", "express", "server"],
            "For backend development, Hrishikesh works with Node.js to create robust server-side applications. He designs efficient APIs, connects to databases, and implements secure authentication systems. His full-stack expertise enables him to build complete, cohesive applications.",
        ),
    ]
}
