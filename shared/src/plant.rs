//! 植物记录模型
//!
//! 目前没有真实持久化：面板展示演示数据，录入表单只做校验。

use crate::date::{parse_iso_date, today};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// 浇水进度条的满刻度（天）
pub const WATERING_SCALE_DAYS: u32 = 14;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub species: String,
    pub planted_date: NaiveDate,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_frequency_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_watered: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub user_id: String,
}

impl Plant {
    /// 下一次浇水日期
    ///
    /// 从未浇过水时以种植日期为起点。
    pub fn next_watering(&self) -> Option<NaiveDate> {
        let frequency = self.water_frequency_days?;
        let base = self.last_watered.unwrap_or(self.planted_date);
        base.checked_add_signed(Duration::days(i64::from(frequency)))
    }

    /// 距离下一次浇水的天数，已逾期时为负数
    pub fn days_until_watering(&self, today: NaiveDate) -> Option<i64> {
        self.next_watering()
            .map(|next| next.signed_duration_since(today).num_days())
    }

    /// 浇水频率相对满刻度的比例，范围 `[0, 1]`
    pub fn watering_progress(&self) -> f64 {
        let frequency = self.water_frequency_days.unwrap_or(0);
        (f64::from(frequency) / f64::from(WATERING_SCALE_DAYS)).clamp(0.0, 1.0)
    }
}

// =========================================================
// 表单草稿 (Draft)
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlantDraftError {
    #[error("Plant name is required")]
    MissingName,
    #[error("Location is required")]
    MissingLocation,
    #[error("Planting date must be a valid date (YYYY-MM-DD)")]
    InvalidPlantedDate,
    #[error("Planting date cannot be in the future")]
    PlantedInFuture,
    #[error("Watering frequency must be a positive number of days")]
    InvalidWaterFrequency,
}

/// 录入表单的原始输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantDraft {
    pub name: String,
    pub species: String,
    pub planted_date: String,
    pub location: String,
    pub notes: String,
    pub water_frequency: String,
}

impl Default for PlantDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: String::new(),
            planted_date: crate::date::to_iso_date(today()),
            location: String::new(),
            notes: String::new(),
            water_frequency: String::new(),
        }
    }
}

impl PlantDraft {
    /// 校验草稿并生成植物记录
    ///
    /// `today` 用于拒绝未来的种植日期。
    pub fn validate(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
        today: NaiveDate,
    ) -> Result<Plant, PlantDraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PlantDraftError::MissingName);
        }
        let location = self.location.trim();
        if location.is_empty() {
            return Err(PlantDraftError::MissingLocation);
        }

        let planted_date =
            parse_iso_date(&self.planted_date).ok_or(PlantDraftError::InvalidPlantedDate)?;
        if planted_date > today {
            return Err(PlantDraftError::PlantedInFuture);
        }

        let water_frequency_days = match self.water_frequency.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(days) if days > 0 => Some(days),
                _ => return Err(PlantDraftError::InvalidWaterFrequency),
            },
        };

        let notes = Some(self.notes.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(Plant {
            id: id.into(),
            name: name.to_string(),
            species: self.species.trim().to_string(),
            planted_date,
            location: location.to_string(),
            notes,
            water_frequency_days,
            last_watered: None,
            image_url: None,
            user_id: user_id.into(),
        })
    }
}

// =========================================================
// 演示数据 (Demo Data)
// =========================================================

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// 面板展示用的演示植物，归属给定用户
pub fn demo_plants(user_id: &str) -> Vec<Plant> {
    vec![
        Plant {
            id: "1".into(),
            name: "Monstera Deliciosa".into(),
            species: "Monstera deliciosa".into(),
            planted_date: ymd(2023, 4, 15),
            location: "Living Room".into(),
            notes: Some("Thriving well near the east-facing window".into()),
            water_frequency_days: Some(7),
            last_watered: Some(ymd(2023, 5, 10)),
            image_url: Some("https://images.unsplash.com/photo-1614594975525-e45190c55d0b?auto=format&fit=crop&w=500&q=80".into()),
            user_id: user_id.to_string(),
        },
        Plant {
            id: "2".into(),
            name: "Snake Plant".into(),
            species: "Sansevieria trifasciata".into(),
            planted_date: ymd(2023, 2, 20),
            location: "Bedroom".into(),
            notes: Some("Very low maintenance, perfect for the corner spot".into()),
            water_frequency_days: Some(14),
            last_watered: Some(ymd(2023, 5, 5)),
            image_url: Some("https://images.unsplash.com/photo-1593482892290-f54927ae2b7a?auto=format&fit=crop&w=500&q=80".into()),
            user_id: user_id.to_string(),
        },
        Plant {
            id: "3".into(),
            name: "Peace Lily".into(),
            species: "Spathiphyllum".into(),
            planted_date: ymd(2023, 3, 10),
            location: "Home Office".into(),
            notes: Some("Droops when it needs water, then perks right up after watering".into()),
            water_frequency_days: Some(5),
            last_watered: Some(ymd(2023, 5, 12)),
            image_url: Some("https://images.unsplash.com/photo-1593691567111-12b1d9a525f8?auto=format&fit=crop&w=500&q=80".into()),
            user_id: user_id.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PlantDraft {
        PlantDraft {
            name: "  Fiddle Leaf Fig ".into(),
            species: "Ficus lyrata".into(),
            planted_date: "2024-03-01".into(),
            location: "Hallway".into(),
            notes: "   ".into(),
            water_frequency: "10".into(),
        }
    }

    #[test]
    fn next_watering_uses_last_watered() {
        let plant = &demo_plants("u-1")[0];
        assert_eq!(plant.next_watering(), Some(ymd(2023, 5, 17)));
        assert_eq!(plant.days_until_watering(ymd(2023, 5, 14)), Some(3));
        assert_eq!(plant.days_until_watering(ymd(2023, 5, 20)), Some(-3));
    }

    #[test]
    fn next_watering_falls_back_to_planted_date() {
        let mut plant = demo_plants("u-1").remove(2);
        plant.last_watered = None;
        assert_eq!(plant.next_watering(), Some(ymd(2023, 3, 15)));

        plant.water_frequency_days = None;
        assert_eq!(plant.next_watering(), None);
        assert_eq!(plant.days_until_watering(ymd(2023, 3, 1)), None);
    }

    #[test]
    fn watering_progress_is_clamped() {
        let mut plant = demo_plants("u-1").remove(0);
        assert!((plant.watering_progress() - 0.5).abs() < f64::EPSILON);
        plant.water_frequency_days = Some(30);
        assert!((plant.watering_progress() - 1.0).abs() < f64::EPSILON);
        plant.water_frequency_days = None;
        assert_eq!(plant.watering_progress(), 0.0);
    }

    #[test]
    fn demo_plants_belong_to_user() {
        let plants = demo_plants("owner");
        assert_eq!(plants.len(), 3);
        assert!(plants.iter().all(|p| p.user_id == "owner"));
    }

    #[test]
    fn valid_draft_produces_plant() {
        let plant = draft().validate("p-1", "u-1", ymd(2024, 6, 1)).unwrap();
        assert_eq!(plant.name, "Fiddle Leaf Fig");
        assert_eq!(plant.planted_date, ymd(2024, 3, 1));
        assert_eq!(plant.water_frequency_days, Some(10));
        assert_eq!(plant.notes, None);
        assert_eq!(plant.last_watered, None);
        assert_eq!(plant.user_id, "u-1");
    }

    #[test]
    fn draft_requires_name_and_location() {
        let mut d = draft();
        d.name = " ".into();
        assert_eq!(
            d.validate("p", "u", ymd(2024, 6, 1)),
            Err(PlantDraftError::MissingName)
        );

        let mut d = draft();
        d.location.clear();
        assert_eq!(
            d.validate("p", "u", ymd(2024, 6, 1)),
            Err(PlantDraftError::MissingLocation)
        );
    }

    #[test]
    fn draft_rejects_bad_dates() {
        let mut d = draft();
        d.planted_date = "yesterday".into();
        assert_eq!(
            d.validate("p", "u", ymd(2024, 6, 1)),
            Err(PlantDraftError::InvalidPlantedDate)
        );

        let d = draft();
        assert_eq!(
            d.validate("p", "u", ymd(2024, 2, 1)),
            Err(PlantDraftError::PlantedInFuture)
        );
    }

    #[test]
    fn draft_water_frequency_rules() {
        let mut d = draft();
        d.water_frequency = String::new();
        let plant = d.validate("p", "u", ymd(2024, 6, 1)).unwrap();
        assert_eq!(plant.water_frequency_days, None);

        for bad in ["0", "-3", "weekly"] {
            let mut d = draft();
            d.water_frequency = bad.into();
            assert_eq!(
                d.validate("p", "u", ymd(2024, 6, 1)),
                Err(PlantDraftError::InvalidWaterFrequency)
            );
        }
    }
}
