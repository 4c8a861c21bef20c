//! 제출된 입력 폼과 계산 전 검증 관문.

use serde::{Deserialize, Serialize};

use crate::consumption::WeeklyUsage;
use crate::household::{ApplianceFlags, DwellingKind, DwellingProfile, PersonalInfo, SizeCategory};

/// 반드시 채워야 하는 입력 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Age,
    City,
    Area,
    DwellingKind,
    SizeCategory,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Age => "age",
            RequiredField::City => "city",
            RequiredField::Area => "area",
            RequiredField::DwellingKind => "dwelling kind",
            RequiredField::SizeCategory => "house type",
        }
    }
}

/// 필수 입력이 비어 있거나 선택되지 않았을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteInputError {
    pub missing: Vec<RequiredField>,
}

impl std::fmt::Display for IncompleteInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.missing.iter().map(RequiredField::label).collect();
        write!(f, "missing required input: {}", names.join(", "))
    }
}

impl std::error::Error for IncompleteInputError {}

/// 한 번의 제출에서 모은 원본 입력. 선택 항목은 미선택 시 `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    #[serde(flatten)]
    pub personal: PersonalInfo,
    pub dwelling_kind: Option<DwellingKind>,
    pub size: Option<SizeCategory>,
    pub appliances: ApplianceFlags,
    /// 요일별 사용 패턴. 없으면 간이 계산만 가능하다.
    pub weekly_usage: Option<WeeklyUsage>,
}

/// 검증을 통과한 가구 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct Household {
    pub personal: PersonalInfo,
    pub kind: DwellingKind,
    pub profile: DwellingProfile,
    pub appliances: ApplianceFlags,
    pub weekly_usage: Option<WeeklyUsage>,
}

impl FormInput {
    /// 필수 항목을 확인하고 계산용 입력으로 바꾼다. 빠진 항목을 모두 모아 돌려준다.
    pub fn validate(&self) -> Result<Household, IncompleteInputError> {
        let mut missing = Vec::new();
        let p = &self.personal;
        if p.name.trim().is_empty() {
            missing.push(RequiredField::Name);
        }
        if !matches!(p.age, Some(age) if age > 0) {
            missing.push(RequiredField::Age);
        }
        if p.city.trim().is_empty() {
            missing.push(RequiredField::City);
        }
        if p.area.trim().is_empty() {
            missing.push(RequiredField::Area);
        }
        if self.dwelling_kind.is_none() {
            missing.push(RequiredField::DwellingKind);
        }
        if self.size.is_none() {
            missing.push(RequiredField::SizeCategory);
        }
        let (Some(kind), Some(size), true) = (self.dwelling_kind, self.size, missing.is_empty())
        else {
            tracing::info!(?missing, "form rejected");
            return Err(IncompleteInputError { missing });
        };

        let weekly_usage = self.weekly_usage.map(|usage| {
            if !usage.is_within_range() {
                tracing::warn!("usage hours out of range; clamping to slider limits");
            }
            usage.clamped()
        });
        Ok(Household {
            personal: PersonalInfo {
                name: p.name.trim().to_string(),
                age: p.age,
                city: p.city.trim().to_string(),
                area: p.area.trim().to_string(),
            },
            kind,
            profile: DwellingProfile::new(size),
            appliances: self.appliances,
            weekly_usage,
        })
    }
}

impl Household {
    /// "area, city" 형식의 위치.
    pub fn location(&self) -> String {
        format!("{}, {}", self.personal.area, self.personal.city)
    }

    /// "2BHK Flat" 형식의 주택 유형.
    pub fn property_label(&self) -> String {
        format!("{} {}", self.profile.size.label(), self.kind.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FormInput {
        FormInput {
            personal: PersonalInfo {
                name: "Asha".into(),
                age: Some(34),
                city: "Pune".into(),
                area: "Kothrud".into(),
            },
            dwelling_kind: Some(DwellingKind::Flat),
            size: Some(SizeCategory::TwoBhk),
            appliances: ApplianceFlags::default(),
            weekly_usage: None,
        }
    }

    #[test]
    fn complete_form_passes() {
        let h = complete().validate().expect("complete form");
        assert_eq!(h.profile.light_count, 3);
        assert_eq!(h.location(), "Kothrud, Pune");
        assert_eq!(h.property_label(), "2BHK Flat");
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let mut form = complete();
        form.personal.city = "   ".into();
        let err = form.validate().unwrap_err();
        assert_eq!(err.missing, vec![RequiredField::City]);
    }

    #[test]
    fn collects_every_missing_field() {
        let err = FormInput::default().validate().unwrap_err();
        assert_eq!(err.missing.len(), 6);
        assert!(err.to_string().contains("house type"));
    }
}
