pub struct Icons;

impl Icons {
    pub const SCROLL: &str = "📜";
    pub const CHECK: &str = "✅";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const BRAIN: &str = "🧠";
    pub const PERSON: &str = "👤";
    pub const TAG: &str = "🏷️";
    pub const DOWN: &str = "⬇️";
    pub const TROPHY: &str = "🏆";
    pub const GLOBE: &str = "🌍";
}
