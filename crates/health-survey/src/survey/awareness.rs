use std::fmt;

use serde::Serialize;

/// One awareness topic, with the long and the compact description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicCard {
    pub title: &'static str,
    pub summary: &'static str,
    pub short_summary: &'static str,
}

/// A titled bullet list of health insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsightList {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// Static health-awareness content shown alongside the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AwarenessContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub topics: &'static [TopicCard],
    pub mission: &'static str,
    pub insights: &'static [InsightList],
}

const TOPICS: [TopicCard; 4] = [
    TopicCard {
        title: "Diabetes Management",
        summary: "Learn how regular screening, balanced diet, and physical activity can help prevent or manage diabetes effectively.",
        short_summary: "Regular screening and balanced diet for diabetes prevention.",
    },
    TopicCard {
        title: "Physical Fitness",
        summary: "Consistent exercise boosts immunity, improves cardiovascular health, and enhances energy and mood.",
        short_summary: "Exercise daily for better health and energy.",
    },
    TopicCard {
        title: "Mental Wellness",
        summary: "Mindfulness, stress management, and good sleep are key to a healthier mind and emotional balance.",
        short_summary: "Mindfulness and stress control for emotional balance.",
    },
    TopicCard {
        title: "Balanced Nutrition",
        summary: "A nutritious diet rich in fruits, vegetables, and whole grains keeps your body strong and mind sharp.",
        short_summary: "Healthy food choices for a sharp mind and strong body.",
    },
];

const INSIGHTS: [InsightList; 3] = [
    InsightList {
        title: "Symptoms of Diabetes",
        items: &[
            "Frequent thirst and urination",
            "Fatigue or tiredness",
            "Unexplained weight loss",
            "Blurred vision or slow healing",
            "Increased hunger despite eating",
        ],
    },
    InsightList {
        title: "Mental Health & Wellness",
        items: &[
            "Practice deep breathing",
            "Connect with loved ones",
            "Get enough sleep",
            "Limit screen time",
            "Seek help when stressed",
        ],
    },
    InsightList {
        title: "Diet & Physical Fitness",
        items: &[
            "Eat fruits & vegetables",
            "Include whole grains",
            "Stay hydrated",
            "Exercise 30 mins daily",
            "Stretch during long sitting hours",
        ],
    },
];

const CONTENT: AwarenessContent = AwarenessContent {
    title: "Holistic Health & Wellness",
    tagline: "Empowering communities with awareness about diabetes management, physical fitness, mental well-being, and balanced nutrition.",
    topics: &TOPICS,
    mission: "To promote holistic health by integrating awareness of physical, mental, and emotional well-being. This helps users identify habits, learn preventive care, and live a balanced lifestyle.",
    insights: &INSIGHTS,
};

pub fn awareness_content() -> &'static AwarenessContent {
    &CONTENT
}

impl fmt::Display for AwarenessContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.tagline)?;
        for topic in self.topics {
            writeln!(f)?;
            writeln!(f, "{}: {}", topic.title, topic.short_summary)?;
        }
        writeln!(f)?;
        writeln!(f, "Our Mission")?;
        writeln!(f, "{}", self.mission)?;
        writeln!(f)?;
        writeln!(f, "Health Insights")?;
        for insight in self.insights {
            writeln!(f, "{}", insight.title)?;
            for item in insight.items {
                writeln!(f, "  - {item}")?;
            }
        }
        Ok(())
    }
}
