use rand::Rng;

/// Knuthのシャッフル(Fisher-Yates)
///
/// i番目の要素を[0, i]から一様に選んだ位置の要素と交換する
/// 全ての並びが等確率で現れ、実行時間はO(n)
pub fn knuth_shuffle<T, R: Rng + ?Sized>(list: &mut [T], rng: &mut R) {
    for i in 0..list.len() {
        let r = rng.gen_range(0..=i);
        list.swap(i, r);
    }
}
