#![allow(dead_code)]

use dualsparse::algebra::MatrixOrder;

// A =
//[2.0   ⋅   1.0]
//[ ⋅   3.0   ⋅ ]
//[4.0   ⋅   5.0]
pub fn example_3x3() -> Vec<Vec<f64>> {
    vec![vec![2., 0., 1.], vec![0., 3., 0.], vec![4., 0., 5.]]
}

pub fn example_5x4() -> Vec<Vec<f64>> {
    vec![
        vec![1., 0., -2., 0.],
        vec![0., 3., 0., 1.],
        vec![-1., 0., 0., 4.],
        vec![2., -1., 0., 0.],
        vec![0., 0., 5., -1.],
    ]
}

/// compressed (ptr, ind, val) arrays of a dense matrix in `order`
pub fn compress<T: Copy + Default + PartialEq>(
    dense: &[Vec<T>],
    order: MatrixOrder,
) -> (Vec<usize>, Vec<usize>, Vec<T>) {
    let m = dense.len();
    let n = dense.first().map_or(0, |r| r.len());
    let (primary, secondary) = match order {
        MatrixOrder::Row => (m, n),
        MatrixOrder::Col => (n, m),
    };

    let mut ptr = vec![0];
    let mut ind = vec![];
    let mut val = vec![];
    for k in 0..primary {
        for j in 0..secondary {
            let v = match order {
                MatrixOrder::Row => dense[k][j],
                MatrixOrder::Col => dense[j][k],
            };
            if v != T::default() {
                ind.push(j);
                val.push(v);
            }
        }
        ptr.push(ind.len());
    }
    (ptr, ind, val)
}

pub fn dense_mul(dense: &[Vec<f64>], x: &[f64]) -> Vec<f64> {
    dense
        .iter()
        .map(|row| row.iter().zip(x).map(|(a, b)| a * b).sum())
        .collect()
}

pub fn dense_transpose(dense: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = dense.first().map_or(0, |r| r.len());
    (0..n)
        .map(|j| dense.iter().map(|row| row[j]).collect())
        .collect()
}

pub fn max_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(0., |acc, (x, y)| f64::max(acc, (x - y).abs()))
}
