//! 가구(주거 형태·면적·보유 가전) 정보 모델.

use serde::{Deserialize, Serialize};

/// 주택 면적 구분(BHK: 침실-거실-주방 수).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeCategory {
    #[serde(rename = "1BHK")]
    OneBhk,
    #[serde(rename = "2BHK")]
    TwoBhk,
    #[serde(rename = "3BHK")]
    ThreeBhk,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 3] = [
        SizeCategory::OneBhk,
        SizeCategory::TwoBhk,
        SizeCategory::ThreeBhk,
    ];

    /// 면적 구분별 조명/선풍기 수. 두 값은 항상 같다.
    pub fn fixture_count(&self) -> u32 {
        match self {
            SizeCategory::OneBhk => 2,
            SizeCategory::TwoBhk => 3,
            SizeCategory::ThreeBhk => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeCategory::OneBhk => "1BHK",
            SizeCategory::TwoBhk => "2BHK",
            SizeCategory::ThreeBhk => "3BHK",
        }
    }

    /// "1BHK", "2bhk", "2" 같은 입력을 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "1bhk" => Some(SizeCategory::OneBhk),
            "2" | "2bhk" => Some(SizeCategory::TwoBhk),
            "3" | "3bhk" => Some(SizeCategory::ThreeBhk),
            _ => None,
        }
    }
}

/// 주거 형태. 계산에는 영향이 없고 입력 검증과 요약에만 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DwellingKind {
    Flat,
    Tenement,
}

impl DwellingKind {
    pub const ALL: [DwellingKind; 2] = [DwellingKind::Flat, DwellingKind::Tenement];

    pub fn label(&self) -> &'static str {
        match self {
            DwellingKind::Flat => "Flat",
            DwellingKind::Tenement => "Tenement",
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            DwellingKind::Flat => "dwelling.flat",
            DwellingKind::Tenement => "dwelling.tenement",
        }
    }
}

/// 면적 구분과 그로부터 정해지는 조명/선풍기 수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DwellingProfile {
    pub size: SizeCategory,
    pub light_count: u32,
    pub fan_count: u32,
}

impl DwellingProfile {
    pub fn new(size: SizeCategory) -> Self {
        let count = size.fixture_count();
        Self {
            size,
            light_count: count,
            fan_count: count,
        }
    }
}

impl From<SizeCategory> for DwellingProfile {
    fn from(value: SizeCategory) -> Self {
        DwellingProfile::new(value)
    }
}

/// 선택 가전 보유 여부. 조명과 선풍기는 항상 있다고 본다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplianceFlags {
    pub has_ac: bool,
    pub has_fridge: bool,
    pub has_washing_machine: bool,
}

/// 신상 정보. 나이는 0이면 미입력으로 본다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub age: Option<u32>,
    pub city: String,
    pub area: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_counts_follow_size() {
        assert_eq!(DwellingProfile::new(SizeCategory::OneBhk).light_count, 2);
        assert_eq!(DwellingProfile::new(SizeCategory::TwoBhk).fan_count, 3);
        let p = DwellingProfile::from(SizeCategory::ThreeBhk);
        assert_eq!((p.light_count, p.fan_count), (4, 4));
    }

    #[test]
    fn parse_size_labels() {
        assert_eq!(SizeCategory::parse("2BHK"), Some(SizeCategory::TwoBhk));
        assert_eq!(SizeCategory::parse(" 3 "), Some(SizeCategory::ThreeBhk));
        assert_eq!(SizeCategory::parse("Select..."), None);
    }
}
