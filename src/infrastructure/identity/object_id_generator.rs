use chrono::Utc;
use rand::Rng;

use crate::application::ports::IdGenerator;
use crate::domain::value_objects::HomeId;

/// Mints 12-byte ids rendered as 24 lowercase hex characters.
///
/// The first four bytes are the big-endian creation time in unix seconds so
/// ids sort roughly by age; the rest is random.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectIdGenerator;

impl ObjectIdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Unix seconds reduced modulo 2^32, wrapping in 2106 like ObjectID timestamps
    fn wrapped_seconds(unix_seconds: i64) -> u32 {
        // rem_euclid keeps the value in 0..2^32, so the cast is lossless
        unix_seconds.rem_euclid(1 << 32) as u32
    }

    fn encode(seconds: u32, random: [u8; 8]) -> String {
        let mut raw = [0u8; 12];
        raw[..4].copy_from_slice(&seconds.to_be_bytes());
        raw[4..].copy_from_slice(&random);
        hex::encode(raw)
    }
}

impl IdGenerator for ObjectIdGenerator {
    fn next_id(&self) -> HomeId {
        let seconds = Self::wrapped_seconds(Utc::now().timestamp());
        let random: [u8; 8] = rand::rng().random();
        HomeId::from_generated(Self::encode(seconds, random))
    }
}
