use bitga::bitstring::BitString;
use bitga::rng::RandomNumberGenerator;

#[test]
fn round_trip_stays_within_one_quantization_step() {
    for bits_per_group in [1, 2, 4, 8, 16, 24, 32] {
        let mut bits = BitString::new(bits_per_group, 3, -5.12, 5.12).unwrap();
        let step = (5.12 - (-5.12)) / bits.max_full_size();
        let values = [-5.12, -1.234, 3.999];

        bits.encode(&values).unwrap();
        let decoded = bits.decode();
        for (&v, &d) in values.iter().zip(&decoded) {
            assert!(
                (v - d).abs() <= step,
                "bits_per_group={}: {} decoded to {} (step {})",
                bits_per_group,
                v,
                d,
                step
            );
        }
    }
}

#[test]
fn round_trip_is_exact_on_grid_points() {
    // 4 bits over [0, 15] represent the integers exactly.
    let mut bits = BitString::new(4, 1, 0.0, 15.0).unwrap();
    for v in 0..=15 {
        bits.encode(&[v as f64]).unwrap();
        assert_eq!(bits.decode()[0], v as f64);
    }
}

#[test]
fn decode_is_monotonic_in_the_group_value() {
    let mut previous = f64::NEG_INFINITY;
    for v in 0..=255u64 {
        let group: Vec<u8> = (0..8).rev().map(|i| ((v >> i) & 1) as u8).collect();
        let bits = BitString::from_bits(group, -1.0, 1.0, 1).unwrap();
        let decoded = bits.decode()[0];
        assert!(decoded > previous);
        previous = decoded;
    }
}

#[test]
fn bounds_are_hit_exactly() {
    let zeros = BitString::new(16, 2, -65.536, 65.536).unwrap();
    assert_eq!(zeros.decode(), vec![-65.536, -65.536]);

    let ones = BitString::from_bits(vec![1; 32], -65.536, 65.536, 2).unwrap();
    assert_eq!(ones.decode(), vec![65.536, 65.536]);
}

#[test]
fn randomize_keeps_decoded_values_in_range() {
    let mut rng = RandomNumberGenerator::from_seed(42);
    let mut bits = BitString::new(32, 5, -5.12, 5.12).unwrap();
    for _ in 0..20 {
        bits.randomize(&mut rng);
        for value in bits.decode() {
            assert!((-5.12..=5.12).contains(&value));
        }
    }
}

#[test]
fn equality_covers_bounds_groups_and_bits() {
    let a = BitString::from_bits(vec![0, 1, 1, 0], 0.0, 1.0, 2).unwrap();
    let b = BitString::from_bits(vec![0, 1, 1, 0], 0.0, 1.0, 2).unwrap();
    let different_bits = BitString::from_bits(vec![0, 1, 1, 1], 0.0, 1.0, 2).unwrap();
    let different_bounds = BitString::from_bits(vec![0, 1, 1, 0], 0.0, 2.0, 2).unwrap();
    let different_groups = BitString::from_bits(vec![0, 1, 1, 0], 0.0, 1.0, 1).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, different_bits);
    assert_ne!(a, different_bounds);
    assert_ne!(a, different_groups);
}

#[test]
fn flip_toggles_a_single_bit() {
    let mut bits = BitString::new(4, 1, 0.0, 15.0).unwrap();
    bits.flip(0);
    assert_eq!(bits.as_slice(), &[1, 0, 0, 0]);
    bits.flip(0);
    assert_eq!(bits.as_slice(), &[0, 0, 0, 0]);
}
