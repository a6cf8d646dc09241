pub mod out_util;
pub mod rand_util;
