use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};

/// Unix timestamp of the Lisk genesis epoch, `2016-05-24T17:00:00Z`.
pub const EPOCH_UNIX_SECONDS: i64 = 1_464_109_200;

pub fn sha256<S: AsRef<[u8]>>(bytes: &[S]) -> [u8; 32] {
    //! Compute SHA-256 hash.
    //!
    //! Builds a hash iteratively by updating with every element
    //! of the input sequence.
    let mut hasher = Sha256::new();
    bytes.iter().for_each(|b| hasher.update(b));
    hasher.finalize().into()
}

pub fn time_from_epoch(moment: DateTime<Utc>) -> i32 {
    //! Seconds elapsed between the Lisk epoch and `moment`.
    //!
    //! Moments outside of the representable range are clamped.
    let elapsed = moment.timestamp() - EPOCH_UNIX_SECONDS;
    elapsed.clamp(i32::MIN.into(), i32::MAX.into()) as i32
}

pub fn time_with_offset(offset_seconds: i64) -> i32 {
    //! Current Lisk timestamp shifted by `offset_seconds`.
    let now = Utc::now();
    time_from_epoch(
        Duration::try_seconds(offset_seconds)
            .and_then(|offset| now.checked_add_signed(offset))
            .unwrap_or(now),
    )
}
