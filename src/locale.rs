//! Static label tables for the bilingual interface.
//!
//! Only the fixed UI chrome is translated. Generated tips and the
//! clipboard export line stay in English in both languages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Si,
}

impl Language {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::En => &EN,
            Language::Si => &SI,
        }
    }
}

/// Every static label the interface renders.
pub struct Labels {
    pub subtitle: &'static str,
    pub device: &'static str,
    pub ram: &'static str,
    pub storage: &'static str,
    pub usage: &'static str,
    pub free_storage: &'static str,
    pub style: &'static str,
    pub refresh: &'static str,
    pub touch: &'static str,
    pub generate: &'static str,
    pub pro_tip: &'static str,
    pub results: &'static str,
    pub history: &'static str,
    pub clear: &'static str,
    pub no_data: &'static str,
    pub settings: &'static str,
    pub language: &'static str,
}

pub const EN: Labels = Labels {
    subtitle: "ULTIMATE FRICTION ENGINE",
    device: "Device Name",
    ram: "Total RAM",
    storage: "Total Storage",
    usage: "RAM Usage %",
    free_storage: "Free Storage (GB)",
    style: "Play Style",
    refresh: "Refresh Rate",
    touch: "Touch Method",
    generate: "GENERATE SETTINGS",
    pro_tip: "Pro Tip",
    results: "Optimization Results",
    history: "History",
    clear: "Clear",
    no_data: "No Data",
    settings: "Settings",
    language: "Language",
};

pub const SI: Labels = Labels {
    subtitle: "සුපිරි සංවේදීතා එන්ජිම",
    device: "දුරකථන මාදිලිය",
    ram: "මුළු RAM",
    storage: "මුළු Storage",
    usage: "RAM භාවිතය %",
    free_storage: "ඉතිරි Storage (GB)",
    style: "ක්‍රීඩා විලාසය",
    refresh: "Refresh Rate",
    touch: "ස්පර්ශ ක්‍රමය",
    generate: "AI Sensitivity සාදන්න",
    pro_tip: "වැදගත්",
    results: "ප්‍රතිඵල",
    history: "ඉතිහාසය",
    clear: "මකන්න",
    no_data: "දත්ත නැත",
    settings: "සකසීම්",
    language: "භාෂාව",
};
