//! Demo Data Source
//!
//! Static keyword tables used when the backend cannot be reached. Lookup is a
//! case-insensitive substring match evaluated in declaration order; the first
//! keyword found in the prompt wins, otherwise the table's default entry is used.

use crate::post::ImageRef;
use serde::Serialize;

/// One keyword and the value it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MockEntry {
    pub keyword: &'static str,
    pub value: &'static str,
}

/// Ordered, read-only keyword table with a designated default.
#[derive(Debug)]
pub struct MockTable {
    entries: &'static [MockEntry],
    default: MockEntry,
}

impl MockTable {
    pub const fn new(entries: &'static [MockEntry], default: MockEntry) -> Self {
        Self { entries, default }
    }

    /// First entry whose keyword occurs in the lowercased prompt, else the default.
    pub fn lookup(&self, prompt: &str) -> &MockEntry {
        let prompt = prompt.to_lowercase();
        self.entries
            .iter()
            .find(|entry| prompt.contains(entry.keyword))
            .unwrap_or(&self.default)
    }

    pub fn entries(&self) -> &'static [MockEntry] {
        self.entries
    }

    pub fn default_entry(&self) -> &MockEntry {
        &self.default
    }

    /// Entry for an exact keyword (including "default").
    pub fn get(&self, keyword: &str) -> Option<&MockEntry> {
        if keyword == self.default.keyword {
            return Some(&self.default);
        }
        self.entries.iter().find(|entry| entry.keyword == keyword)
    }
}

const DEFAULT_KEYWORD: &str = "default";

pub static CONTENT_TABLE: MockTable = MockTable::new(
    &[
        MockEntry {
            keyword: "ai",
            value: "🚀 **The AI Revolution is Here!**

Artificial Intelligence is transforming every industry, from healthcare to finance. Here's what excites me most:

• **Automation**: Streamlining repetitive tasks
• **Insights**: Uncovering hidden patterns in data
• **Innovation**: Creating solutions we never imagined

What's your take on AI? Are you excited or concerned about its impact on your field?

Share your thoughts below! 👇

#AI #Innovation #FutureOfWork #Technology",
        },
        MockEntry {
            keyword: "marketing",
            value: "💡 **Digital Marketing Secrets That Actually Work**

After years in the industry, here are the 3 strategies that consistently deliver results:

🎯 **Content is King**: Quality over quantity every time
📱 **Mobile-First**: Your audience is on mobile devices
📊 **Data-Driven**: Let analytics guide your decisions

The key? Consistency and authenticity.

What marketing tactic has worked best for you? Drop your insights in the comments!

#DigitalMarketing #MarketingTips #Growth #Strategy",
        },
        MockEntry {
            keyword: "technology",
            value: "⚡ **Tech Trends That Will Shape 2025**

The future is arriving faster than ever! Here's what's on my radar:

🔮 **AI Integration**: Seamless AI in everyday tools
🌐 **Web3 Evolution**: Beyond the hype, real applications
🔒 **Cybersecurity**: Protecting our digital lives

Technology should solve real problems, not create new ones.

Which tech trend are you most excited about? Let's discuss!

#Technology #Innovation #TechTrends #Future",
        },
    ],
    MockEntry {
        keyword: DEFAULT_KEYWORD,
        value: "✨ **Creating Meaningful Content**

Every post is an opportunity to connect, inspire, and add value to someone's day.

The best content comes from:
• Authentic experiences
• Genuine insights
• Real conversations

What story do you want to share today?

#ContentCreation #Authenticity #Connection #Growth",
    },
);

pub static IMAGE_TABLE: MockTable = MockTable::new(
    &[
        MockEntry {
            keyword: "ai",
            value: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=600&fit=crop",
        },
        MockEntry {
            keyword: "marketing",
            value: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop",
        },
        MockEntry {
            keyword: "technology",
            value: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=800&h=600&fit=crop",
        },
    ],
    MockEntry {
        keyword: DEFAULT_KEYWORD,
        value: "https://images.unsplash.com/photo-1551434678-e076c223a692?w=800&h=600&fit=crop",
    },
);

/// Demo post text for a prompt.
pub fn lookup_content(prompt: &str) -> &'static str {
    CONTENT_TABLE.lookup(prompt).value
}

/// Demo image URL for a prompt.
pub fn lookup_image(prompt: &str) -> &'static str {
    IMAGE_TABLE.lookup(prompt).value
}

pub const DEMO_POST_MESSAGE: &str = "Demo: Post would be published to LinkedIn!";

/// Simulated publish receipt used when the posting endpoint is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoPost {
    pub post_id: String,
    pub message: String,
    pub content: String,
    pub image: String,
}

pub fn mock_publish(content: &str, image: &ImageRef) -> DemoPost {
    DemoPost {
        post_id: format!("demo-post-{}", chrono::Utc::now().timestamp_millis()),
        message: DEMO_POST_MESSAGE.to_string(),
        content: content.to_string(),
        image: image.describe(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub fn demo_info() -> DemoInfo {
    DemoInfo {
        title: "Demo Mode",
        description: "When the backend server is unreachable, linkpost falls back to built-in \
                      sample data. Full AI-powered content generation and LinkedIn posting \
                      require the backend server.",
        features: &[
            "Mock content generation based on your prompts",
            "Sample images from Unsplash",
            "Simulated LinkedIn posting",
            "Full preview and scheduling flow",
        ],
    }
}
