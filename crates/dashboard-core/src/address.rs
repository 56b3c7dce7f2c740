//! Fake dotted-quad generator for the network scan animation.

use rand::Rng;

/// Four independent octets in `1..=255`, joined by dots.
/// No uniqueness or reserved-range checks.
pub fn fake_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let octets: [u8; 4] = std::array::from_fn(|_| rng.gen_range(1..=255));
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn four_octets_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let addr = fake_address(&mut rng);
            let octets: Vec<u32> = addr.split('.').map(|o| o.parse().unwrap()).collect();
            assert_eq!(octets.len(), 4, "bad address {addr}");
            assert!(octets.iter().all(|&o| (1..=255).contains(&o)), "bad address {addr}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(fake_address(&mut a), fake_address(&mut b));
    }
}
