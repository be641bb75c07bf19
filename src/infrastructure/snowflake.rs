//! Snowflake id generation.
//!
//! 63-bit ids: 41 bits of millisecond timestamp since the service epoch
//! (2018-01-01T00:00:00Z), 10 bits of machine id, 12 bits of per-millisecond
//! sequence. The generator is constructor-injected wherever ids are minted;
//! there is no process-global instance.

use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::warn;

const MACHINE_ID_BITS: u8 = 10;
const SEQUENCE_BITS: u8 = 12;

const TIMESTAMP_SHIFT: u8 = MACHINE_ID_BITS + SEQUENCE_BITS;
const MACHINE_ID_SHIFT: u8 = SEQUENCE_BITS;

const MACHINE_ID_MASK: i64 = ((1 << MACHINE_ID_BITS) - 1) << MACHINE_ID_SHIFT;
const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;

pub const MAX_MACHINE_ID: u16 = (1 << MACHINE_ID_BITS) - 1;

/// First millisecond of 2018, the epoch all timestamps are relative to.
pub const EPOCH_MS: i64 = 1_514_764_800_000;

#[derive(Debug)]
struct GeneratorState {
    last_timestamp: i64,
    sequence: i64,
}

#[derive(Debug)]
pub struct SnowflakeGenerator {
    machine_id: i64,
    state: Mutex<GeneratorState>,
}

impl SnowflakeGenerator {
    pub fn new(machine_id: u16) -> Self {
        assert!(
            machine_id <= MAX_MACHINE_ID,
            "machine id does not fit into 10 bits"
        );

        Self {
            machine_id: i64::from(machine_id),
            state: Mutex::new(GeneratorState {
                last_timestamp: -1,
                sequence: 0,
            }),
        }
    }

    pub fn next_id(&self) -> i64 {
        loop {
            let now = current_millis();
            match self.try_next(now) {
                Some(id) => return id,
                None => {
                    // Sequence exhausted for this millisecond, or the clock
                    // moved backwards; wait and retry.
                    warn!(timestamp = now, "snowflake generation stalled, waiting");
                    std::thread::sleep(Duration::from_millis(1));
                }
            }
        }
    }

    /// Attempts to mint an id for the given timestamp. Returns `None` when
    /// the per-millisecond sequence is exhausted or `timestamp` lies behind
    /// the last one observed.
    fn try_next(&self, timestamp: i64) -> Option<i64> {
        let mut state = self.state.lock().expect("snowflake state lock poisoned");

        if timestamp < state.last_timestamp {
            return None;
        }

        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & SEQUENCE_MASK;
            if state.sequence == 0 {
                return None;
            }
        } else {
            state.sequence = 0;
            state.last_timestamp = timestamp;
        }

        Some(
            ((timestamp - EPOCH_MS) << TIMESTAMP_SHIFT)
                | (self.machine_id << MACHINE_ID_SHIFT)
                | state.sequence,
        )
    }
}

fn current_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

/// Millisecond timestamp (since the service epoch) packed into an id.
pub fn timestamp_of(id: i64) -> i64 {
    id >> TIMESTAMP_SHIFT
}

/// Machine id packed into an id.
pub fn machine_id_of(id: i64) -> i64 {
    (id & MACHINE_ID_MASK) >> MACHINE_ID_SHIFT
}

/// Per-millisecond sequence number packed into an id.
pub fn sequence_of(id: i64) -> i64 {
    id & SEQUENCE_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_unpacks_fields() {
        let generator = SnowflakeGenerator::new(3);
        let timestamp = EPOCH_MS + 1_000;

        let id = generator.try_next(timestamp).expect("id should be minted");

        assert_eq!(timestamp_of(id), 1_000);
        assert_eq!(machine_id_of(id), 3);
        assert_eq!(sequence_of(id), 0);
    }

    #[test]
    fn sequence_increments_within_a_millisecond() {
        let generator = SnowflakeGenerator::new(0);
        let timestamp = EPOCH_MS + 42;

        let first = generator.try_next(timestamp).unwrap();
        let second = generator.try_next(timestamp).unwrap();

        assert_eq!(sequence_of(first), 0);
        assert_eq!(sequence_of(second), 1);
        assert!(second > first);
    }

    #[test]
    fn sequence_resets_on_next_millisecond() {
        let generator = SnowflakeGenerator::new(0);

        generator.try_next(EPOCH_MS + 1).unwrap();
        generator.try_next(EPOCH_MS + 1).unwrap();
        let id = generator.try_next(EPOCH_MS + 2).unwrap();

        assert_eq!(sequence_of(id), 0);
    }

    #[test]
    fn sequence_overflow_asks_caller_to_wait() {
        let generator = SnowflakeGenerator::new(0);
        let timestamp = EPOCH_MS + 7;

        for _ in 0..(SEQUENCE_MASK + 1) {
            assert!(generator.try_next(timestamp).is_some());
        }
        assert!(generator.try_next(timestamp).is_none());
    }

    #[test]
    fn backwards_clock_is_rejected() {
        let generator = SnowflakeGenerator::new(0);

        generator.try_next(EPOCH_MS + 100).unwrap();
        assert!(generator.try_next(EPOCH_MS + 99).is_none());
    }

    #[test]
    fn ids_are_strictly_increasing_across_milliseconds() {
        let generator = SnowflakeGenerator::new(1);

        let earlier = generator.try_next(EPOCH_MS + 10).unwrap();
        let later = generator.try_next(EPOCH_MS + 11).unwrap();

        assert!(later > earlier);
    }

    #[test]
    #[should_panic]
    fn machine_id_out_of_range_panics() {
        SnowflakeGenerator::new(MAX_MACHINE_ID + 1);
    }

    #[test]
    fn system_clock_ids_are_positive() {
        let generator = SnowflakeGenerator::new(0);
        assert!(generator.next_id() > 0);
    }
}
