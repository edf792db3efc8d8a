//! In-memory beat catalog. Stands in for a product database: a seeded list
//! of beats with like toggling, no persistence.

use std::sync::Mutex;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::signup::types::PurchaseContext;

pub mod beats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beat {
    pub id: i32,
    pub title: String,
    pub producer: String,
    pub genre: String,
    pub bpm: u32,
    pub duration: String,
    pub price: f64,
    pub image_url: String,
    pub audio_url: String,
    pub likes: u32,
    pub liked: bool,
}

impl Beat {
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// The purchase context handed to the signup flow when this beat's buy
    /// button opened it.
    pub fn purchase_context(&self) -> PurchaseContext {
        PurchaseContext {
            beat_id: self.id,
            title: self.title.clone(),
            price: self.price,
            producer_name: self.producer.clone(),
        }
    }
}

pub struct BeatStore {
    beats: Mutex<Vec<Beat>>,
}

impl BeatStore {
    pub fn new(beats: Vec<Beat>) -> Self {
        Self {
            beats: Mutex::new(beats),
        }
    }

    pub fn seeded() -> Self {
        Self::new(beats::seed_beats())
    }

    pub fn list(&self) -> Vec<Beat> {
        self.beats.lock().unwrap().clone()
    }

    pub fn get(&self, id: i32) -> Option<Beat> {
        self.beats
            .lock()
            .unwrap()
            .iter()
            .find(|beat| beat.id == id)
            .cloned()
    }

    /// Flips the liked state of a beat and adjusts its like count, returning
    /// the updated beat.
    pub fn toggle_like(&self, id: i32) -> Option<Beat> {
        let mut beats = self.beats.lock().unwrap();
        let beat = beats.iter_mut().find(|beat| beat.id == id)?;
        if beat.liked {
            beat.likes = beat.likes.saturating_sub(1);
        } else {
            beat.likes += 1;
        }
        beat.liked = !beat.liked;
        Some(beat.clone())
    }

    /// Up to `count` random beats for the featured section.
    pub fn featured(&self, count: usize) -> Vec<Beat> {
        let beats = self.beats.lock().unwrap();
        beats
            .choose_multiple(&mut rand::thread_rng(), count)
            .cloned()
            .collect()
    }
}
