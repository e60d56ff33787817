use crate::sample::Sample;

/// Unipolar Gaussian pulse of `len` samples centred at `center`.
pub fn gaussian_pulse(len: usize, center: f64, sigma: f64, amplitude: f64) -> Vec<f64> {
    let two_sigma_sq = 2.0 * sigma * sigma;
    (0..len)
        .map(|i| {
            let d = i as f64 - center;
            amplitude * (-d * d / two_sigma_sq).exp()
        })
        .collect()
}

/// Convolve `signal` with an antisymmetric step of `half_width` samples.
///
/// `y[i] = sum(x[i-L..i]) - sum(x[i+1..=i+L])`, with zeros outside the
/// signal. A unipolar pulse becomes a negative lobe followed by a positive
/// lobe, crossing zero at the pulse centre.
pub fn step_convolve(signal: &[f64], half_width: usize) -> Vec<f64> {
    let n = signal.len();
    let at = |i: isize| -> f64 {
        if i < 0 || i as usize >= n {
            0.0
        } else {
            signal[i as usize]
        }
    };

    (0..n as isize)
        .map(|i| {
            (1..=half_width as isize)
                .map(|j| at(i - j) - at(i + j))
                .sum::<f64>()
        })
        .collect()
}

/// Step-convolved Gaussian pulse: the shape the centroid kernel expects.
pub fn bipolar_pulse(len: usize, center: f64, sigma: f64, half_width: usize) -> Vec<f64> {
    step_convolve(&gaussian_pulse(len, center, sigma, 1.0), half_width)
}

/// Convert samples to the requested float width.
pub fn to_width<T: Sample>(samples: &[f64]) -> Vec<T> {
    samples.iter().map(|&s| T::from_f64(s)).collect()
}
