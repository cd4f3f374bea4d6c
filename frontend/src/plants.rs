//! 会话内录入的植物
//!
//! 只保存在内存中，面板把它们追加在演示植物之后。

use growmate_shared::Plant;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PlantStore {
    added: RwSignal<Vec<Plant>>,
}

impl PlantStore {
    pub fn new() -> Self {
        Self {
            added: RwSignal::new(Vec::new()),
        }
    }

    pub fn add(&self, plant: Plant) {
        log::info!("[Plants] added {} ({})", plant.name, plant.id);
        self.added.update(|list| list.push(plant));
    }

    /// 属于某个用户的已录入植物
    pub fn for_user(&self, user_id: &str) -> Vec<Plant> {
        self.added.with(|list| {
            list.iter()
                .filter(|p| p.user_id == user_id)
                .cloned()
                .collect()
        })
    }
}

pub fn use_plants() -> PlantStore {
    expect_context::<PlantStore>()
}
