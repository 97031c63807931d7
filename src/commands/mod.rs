mod apportion;
mod info;
mod replay;

pub use self::apportion::apportion;
pub use info::info;
pub use replay::replay;

use itertools::Itertools;

/// `39538223` -> `39,538,223`
pub(crate) fn group_thousands(value: u64) -> String {
    let digits: Vec<char> = value.to_string().chars().collect();
    digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .join(",")
}

pub(crate) fn group_thousands_f64(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    format!("{}.{:02}", group_thousands(cents / 100), cents % 100)
}
