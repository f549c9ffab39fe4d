/// Ordinary least squares via the normal equations.
///
/// Each row of `regressors` is one observation; include a column of ones for
/// an intercept. Returns one coefficient per column.
pub fn least_squares(regressors: &[Vec<f64>], response: &[f64]) -> Vec<f64> {
    let k = regressors[0].len();

    // Augmented matrix [X'X | X'y].
    let mut system: Vec<Vec<f64>> = (0..k)
        .map(|i| {
            let mut row: Vec<f64> = (0..k)
                .map(|j| regressors.iter().map(|x| x[i] * x[j]).sum())
                .collect();
            row.push(regressors.iter().zip(response).map(|(x, y)| x[i] * y).sum());
            row
        })
        .collect();

    for pivot in 0..k {
        let best = (pivot..k)
            .max_by(|&a, &b| system[a][pivot].abs().total_cmp(&system[b][pivot].abs()))
            .expect("non-empty range");
        system.swap(pivot, best);

        for row in 0..k {
            if row != pivot {
                let factor = system[row][pivot] / system[pivot][pivot];
                let pivot_row = system[pivot].clone();
                for (value, p) in system[row].iter_mut().zip(pivot_row) {
                    *value -= factor * p;
                }
            }
        }
    }

    (0..k).map(|i| system[i][k] / system[i][i]).collect()
}
