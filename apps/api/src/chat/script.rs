//! The canned script: keyword categories, their replies, and the fallback pool.
//!
//! Category order is part of the contract: an input matching several
//! categories gets the reply of the earliest one.

/// A fixed reply plus the follow-up chips shown under it.
#[derive(Debug, Clone, Copy)]
pub struct CannedReply {
    pub text: &'static str,
    pub suggestions: &'static [&'static str],
}

/// One keyword category of the script.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: CannedReply,
}

/// Client-side pacing hint bounds, in milliseconds.
pub const TYPING_DELAY_MIN_MS: u64 = 1000;
pub const TYPING_DELAY_MAX_MS: u64 = 2000;

/// The widget's opening message.
pub static GREETING: CannedReply = CannedReply {
    text: "Hi! I'm the portfolio assistant. I can help you learn about the developer's \
           experience, projects, and skills. What would you like to know?",
    suggestions: &[
        "Tell me about the projects",
        "What are the main skills?",
        "How can I get in touch?",
        "Work experience?",
    ],
};

/// Ordered keyword categories. First match wins.
pub static CATEGORIES: &[Category] = &[
    Category {
        name: "projects",
        keywords: &["project", "work", "portfolio"],
        reply: CannedReply {
            text: "Here are a few highlights from the portfolio:\n\n\
                   🏆 **Gas Level Detection & Auto Booking System** (award-winning final-year project)\n\
                   - IoT solution built on NodeMCU, gas sensors, and GSM modules\n\
                   - Real-time monitoring through a companion Flutter app\n\n\
                   📱 **E-Commerce Mobile App**\n\
                   - Full shopping flow with Stripe payments\n\
                   - Real-time inventory management\n\n\
                   🎓 **Academy Portal App**\n\
                   - Student enrollment and course tracking\n\
                   - Flutter frontend on a Firebase backend",
            suggestions: &[
                "Tell me more about the IoT project",
                "What technologies were used?",
                "Can I see the code?",
            ],
        },
    },
    Category {
        name: "skills",
        keywords: &["skill", "technology", "tech", "flutter", "firebase"],
        reply: CannedReply {
            text: "The core toolkit is modern mobile development:\n\n\
                   **Core Technologies:**\n\
                   • Flutter - cross-platform mobile development\n\
                   • Firebase - backend services, auth, and data\n\
                   • Dart - primary programming language\n\
                   • IoT - NodeMCU, sensors, GSM modules\n\n\
                   **Additional Skills:**\n\
                   • Git and GitHub for version control\n\
                   • UI/UX design with usability heuristics\n\
                   • RESTful APIs and JSON handling\n\
                   • Stripe payment integration",
            suggestions: &[
                "What about the IoT experience?",
                "Education background?",
                "Any certifications?",
            ],
        },
    },
    Category {
        name: "experience",
        keywords: &["experience", "background", "internship", "job"],
        reply: CannedReply {
            text: "A quick tour of the professional background:\n\n\
                   **Current:** Freelance mobile app developer\n\
                   • Cross-platform apps with Flutter\n\
                   • Full-stack builds with Firebase integration\n\
                   • IoT system development\n\n\
                   **Previous:** Mobile app developer intern\n\
                   • Client-facing mobile applications\n\
                   • Firebase features and responsive UI work\n\
                   • Agile development cycles",
            suggestions: &[
                "What was the final-year project?",
                "Tell me about the achievements",
                "Contact information?",
            ],
        },
    },
    Category {
        name: "contact",
        keywords: &["contact", "hire", "email", "phone"],
        reply: CannedReply {
            text: "Ready to connect? Here's how:\n\n\
                   📧 **Email:** hello@example.dev\n\
                   🔗 **GitHub:** github.com/example\n\
                   💼 **LinkedIn:** linkedin.com/in/example\n\n\
                   Always open to new opportunities, freelance projects, or just a good idea!",
            suggestions: &[
                "What's the availability?",
                "What kind of projects are preferred?",
                "The rates?",
            ],
        },
    },
    Category {
        name: "education",
        keywords: &["education", "university", "degree", "study"],
        reply: CannedReply {
            text: "A solid academic foundation:\n\n\
                   🎓 **Bachelor of Science in Computer Science**\n\n\
                   **Highlights:**\n\
                   • Merit scholarship recipient\n\
                   • Specialized in mobile development and IoT systems\n\
                   • Award-winning final-year project\n\n\
                   **Key Subjects:** Algorithms, Databases, Operating Systems, AI, \
                   Human-Computer Interaction",
            suggestions: &[
                "What was the final-year project?",
                "Any other achievements?",
                "Technical skills?",
            ],
        },
    },
    Category {
        name: "languages",
        keywords: &["language", "speak", "communication"],
        reply: CannedReply {
            text: "Multilingual and comfortable in international teams:\n\n\
                   🗣️ **Languages:**\n\
                   • Pashto - native\n\
                   • Dari - native\n\
                   • English - fluent\n\
                   • Urdu - fluent",
            suggestions: &[
                "Technical skills?",
                "Work experience?",
                "How to get in touch?",
            ],
        },
    },
    Category {
        name: "availability",
        keywords: &["available", "rate", "cost", "price"],
        reply: CannedReply {
            text: "Currently available for new projects!\n\n\
                   **Availability:** open to freelance work and full-time roles\n\n\
                   **Preferred Projects:**\n\
                   • Mobile app development (Flutter)\n\
                   • IoT solutions and smart systems\n\
                   • Firebase backend integration\n\n\
                   For specific rates and project details, please reach out directly.",
            suggestions: &[
                "How to get in touch?",
                "What's the experience?",
                "See the projects",
            ],
        },
    },
];

/// Replies used when no category matches. One is picked pseudo-randomly.
pub static FALLBACK_REPLIES: &[CannedReply] = &[
    CannedReply {
        text: "That's an interesting question! This portfolio belongs to a mobile app \
               developer specializing in Flutter and Firebase, with a side of IoT. \
               What would you like to know more about?",
        suggestions: &[
            "The projects",
            "Technical skills",
            "Contact information",
            "Work experience",
        ],
    },
    CannedReply {
        text: "Happy to help! You're looking at the work of a Computer Science graduate \
               with expertise in mobile development and IoT. What would you like to explore?",
        suggestions: &[
            "Recent projects",
            "Education background",
            "How to hire",
            "The achievements",
        ],
    },
    CannedReply {
        text: "Great question! The developer behind this site combines technical depth with \
               creative problem-solving, from IoT systems to e-commerce apps. \
               What interests you most?",
        suggestions: &["IoT projects", "Mobile apps", "The skills", "Get in touch"],
    },
];

/// Classifies free-text input into the first matching category, if any.
/// Case-insensitive substring matching, in category order.
pub fn classify(input: &str) -> Option<&'static Category> {
    let lower = input.to_lowercase();
    CATEGORIES
        .iter()
        .find(|category| category.keywords.iter().any(|kw| lower.contains(kw)))
}

/// Full selection: a matched category's reply, or the indexed fallback.
/// `fallback_index` is taken modulo the pool size so any index is valid.
pub fn select_reply(input: &str, fallback_index: usize) -> &'static CannedReply {
    match classify(input) {
        Some(category) => &category.reply,
        None => &FALLBACK_REPLIES[fallback_index % FALLBACK_REPLIES.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_is_reachable() {
        for (probe, expected) in [
            ("show me a project", "projects"),
            ("what skills do you have", "skills"),
            ("any internship history", "experience"),
            ("how do I contact you", "contact"),
            ("which university degree", "education"),
            ("what languages do you speak", "languages"),
            ("are you available next month", "availability"),
        ] {
            let category = classify(probe).expect(probe);
            assert_eq!(category.name, expected, "input: {probe}");
        }
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        let category = classify("TELL ME ABOUT YOUR PORTFOLIO").unwrap();
        assert_eq!(category.name, "projects");
    }

    #[test]
    fn test_first_matching_category_wins() {
        // "work" (projects) appears before "experience" in category order,
        // so "work experience" resolves to projects.
        let category = classify("work experience").unwrap();
        assert_eq!(category.name, "projects");

        // "skill" beats "contact" for the same reason.
        let category = classify("contact me about your skill set").unwrap();
        assert_eq!(category.name, "skills");
    }

    #[test]
    fn test_keywords_match_as_substrings() {
        // "technology" contains "tech"; "jobs" contains "job".
        assert_eq!(classify("what technology stack").unwrap().name, "skills");
        assert_eq!(classify("any jobs before this").unwrap().name, "experience");
    }

    #[test]
    fn test_unmatched_input_has_no_category() {
        assert!(classify("hello there").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn test_selection_is_deterministic_for_matches() {
        let a = select_reply("tell me about a project", 0);
        let b = select_reply("tell me about a project", 2);
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn test_fallback_comes_from_pool() {
        for i in 0..10 {
            let reply = select_reply("hmmmm", i);
            assert!(FALLBACK_REPLIES.iter().any(|f| f.text == reply.text));
        }
    }

    #[test]
    fn test_fallback_index_wraps() {
        assert_eq!(
            select_reply("hmmmm", 0).text,
            select_reply("hmmmm", FALLBACK_REPLIES.len()).text
        );
    }

    #[test]
    fn test_every_reply_has_suggestions() {
        for category in CATEGORIES {
            assert!(
                !category.reply.suggestions.is_empty(),
                "category {} has no suggestions",
                category.name
            );
        }
        for fallback in FALLBACK_REPLIES {
            assert!(!fallback.suggestions.is_empty());
        }
        assert!(!GREETING.suggestions.is_empty());
    }
}
