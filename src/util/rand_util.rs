use log::debug;
use rand::{seq::index, Rng};

use crate::error::{Error, Result};

/// [0, 1)の一様乱数をlen個並べた配列を返す
pub fn rand_f64_vec<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

/// [lower, upper)から重複しない整数をlen個選んだ配列を返す
///
/// 範囲に含まれる整数の数がlenより少ない場合はErr(InvalidArgument)
pub fn unique_rand_int_vec<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    lower: i32,
    upper: i32,
) -> Result<Vec<i32>> {
    let width = (upper as i64 - lower as i64).max(0) as usize;
    if width < len {
        debug!(
            "rejecting unique_rand_int_vec: len {} over range {}..{}",
            len, lower, upper
        );
        return Err(Error::InvalidArgument(format!(
            "cannot pick {} unique values from {}..{}",
            len, lower, upper
        )));
    }
    Ok(index::sample(rng, width, len)
        .into_iter()
        .map(|k| (lower as i64 + k as i64) as i32)
        .collect())
}
