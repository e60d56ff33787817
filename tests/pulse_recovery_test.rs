use approx::assert_abs_diff_eq;
use wfcentroid::simulation::{
    NoiseConfig, add_white_noise, bipolar_pulse, gaussian_pulse, step_convolve, to_width,
};
use wfcentroid::{CentroidCalculator, CentroidConfig, RoundingMode, wf_centroid};

const LEN: usize = 256;
const SIGMA: f64 = 3.0;
const HALF_WIDTH: usize = 8;

fn noisy_bipolar_pulse(center: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut raw = gaussian_pulse(LEN, center, SIGMA, 1.0);
    add_white_noise(&mut raw, &NoiseConfig::new(std_dev).with_seed(seed)).unwrap();
    step_convolve(&raw, HALF_WIDTH)
}

#[test]
fn test_clean_pulse_centre_recovered_exactly() {
    for center in [40, 100, 127, 128, 200] {
        let wf = bipolar_pulse(LEN, center as f64, SIGMA, HALF_WIDTH);
        assert_eq!(wf_centroid(&wf, 0.0), center as f64, "centre {}", center);
    }
}

#[test]
fn test_clean_pulse_with_shift() {
    let wf = bipolar_pulse(LEN, 90.0, SIGMA, HALF_WIDTH);
    for shift in [0.0, 1.0, 17.0, 255.0] {
        assert_eq!(wf_centroid(&wf, shift), 90.0 + shift);
    }
    assert!(wf_centroid(&wf, 256.0).is_nan());
}

#[test]
fn test_clean_pulse_f32() {
    let wf: Vec<f32> = to_width(&bipolar_pulse(LEN, 77.0, SIGMA, HALF_WIDTH));
    assert_eq!(wf_centroid(&wf, 3.0_f32), 80.0_f32);
}

#[test]
fn test_half_sample_centre_follows_rounding_mode() {
    // A pulse centred between samples puts the crossing midpoint on x.5
    let wf = bipolar_pulse(LEN, 100.5, SIGMA, HALF_WIDTH);
    let centroid = CentroidCalculator::default().try_compute(&wf, 0.0).unwrap();
    assert_eq!(centroid.window.last_negative, 100);
    assert_eq!(centroid.window.first_positive, 101);
    assert_eq!(centroid.value, 100.0);

    let away = CentroidCalculator::new(CentroidConfig {
        rounding: RoundingMode::HalfAwayFromZero,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(away.compute(&wf, 0.0), 101.0);
}

#[test]
fn test_noisy_pulse_centre_within_one_sample() {
    let calc = CentroidCalculator::default();
    for seed in 0..50 {
        let center = 60.0 + 2.0 * seed as f64;
        let wf = noisy_bipolar_pulse(center, 0.02, seed);
        let centroid = calc.compute(&wf, 0.0);
        assert!(!centroid.is_nan(), "seed {} gave no centroid", seed);
        assert_abs_diff_eq!(centroid, center, epsilon = 1.0);
    }
}

#[test]
fn test_noisy_pulse_mean_error_small() {
    let calc = CentroidCalculator::default();
    let errors: Vec<f64> = (0..100)
        .map(|seed| {
            let wf = noisy_bipolar_pulse(128.0, 0.05, 1000 + seed);
            calc.compute(&wf, 0.0) - 128.0
        })
        .filter(|e| !e.is_nan())
        .collect();

    assert!(errors.len() >= 95, "too many undefined: {}", 100 - errors.len());
    let mean = errors.iter().sum::<f64>() / errors.len() as f64;
    assert_abs_diff_eq!(mean, 0.0, epsilon = 0.5);
}

#[test]
fn test_noise_only_waveform_never_panics() {
    let calc = CentroidCalculator::default();
    for seed in 0..20 {
        let mut wf = vec![0.0; LEN];
        add_white_noise(&mut wf, &NoiseConfig::new(1.0).with_seed(seed)).unwrap();
        let centroid = calc.compute(&wf, 0.0);
        assert!(centroid.is_nan() || (0.0..LEN as f64).contains(&centroid));
    }
}
