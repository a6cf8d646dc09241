use std::cmp::Ordering;

/// マージソート
///
/// 安定なソートで、Θ(n lg n)
/// 作業用の配列は最初に1回だけ確保し、全てのmergeで使い回す
pub fn merge_sort<T: Ord + Clone>(list: &mut [T]) {
    merge_sort_by(list, |a, b| a.cmp(b));
}

/// 比較関数を指定してマージソートする
///
/// compareがEqualを返す要素同士は元の順序を保つ
pub fn merge_sort_by<T, F>(list: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if list.len() < 2 {
        return;
    }
    let mut aux = list.to_vec();
    let r = list.len() - 1;
    sort(list, &mut aux, 0, r, &mut compare);
}

// list[p..=r]をソートする
fn sort<T, F>(list: &mut [T], aux: &mut [T], p: usize, r: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if p < r {
        let q = p + (r - p) / 2;
        sort(list, aux, p, q, compare);
        sort(list, aux, q + 1, r, compare);
        merge(list, aux, p, q, r, compare);
    }
}

// ソート済みのlist[p..=q]とlist[q+1..=r]を併合する
fn merge<T, F>(list: &mut [T], aux: &mut [T], p: usize, q: usize, r: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    aux[p..=r].clone_from_slice(&list[p..=r]);

    let mut i = p;
    let mut j = q + 1;

    for k in p..=r {
        // 等しい場合は左側を優先することで安定になる
        if i <= q && (j > r || compare(&aux[i], &aux[j]) != Ordering::Greater) {
            list[k] = aux[i].clone();
            i += 1;
        } else {
            list[k] = aux[j].clone();
            j += 1;
        }
    }
}
