use crate::curve::{G1Point, G2Point};
use crate::pairing::{ArkworksProvider, Gt, PairingProvider};

use std::sync::{Arc, OnceLock};

static ENGINE: OnceLock<Arc<Engine>> = OnceLock::new();

/// Returns the process-wide engine, initializing it on first use.
///
/// Concurrent first callers block until the single initialization finishes
/// and all of them observe the same instance.
pub fn engine() -> Arc<Engine> {
    ENGINE
        .get_or_init(|| {
            let engine = Engine::new(Box::new(ArkworksProvider::new()));
            tracing::info!("bn254 engine initialized");
            Arc::new(engine)
        })
        .clone()
}

/// Normalized generators together with the pairing backend.
pub struct Engine {
    g1: G1Point,
    g2: G2Point,
    provider: Box<dyn PairingProvider>,
}

impl Engine {
    pub fn new(provider: Box<dyn PairingProvider>) -> Self {
        Self {
            g1: G1Point::GENERATOR.to_affine(),
            g2: G2Point::GENERATOR.to_affine(),
            provider,
        }
    }

    pub fn g1_generator(&self) -> &G1Point {
        &self.g1
    }

    pub fn g2_generator(&self) -> &G2Point {
        &self.g2
    }

    pub fn pairing(&self, p: &G1Point, q: &G2Point) -> Gt {
        self.provider.pairing(p, q)
    }

    /// `e(h, public_key) == e(signature, G2)`.
    pub fn verify_pairing(&self, h: &G1Point, public_key: &G2Point, signature: &G1Point) -> bool {
        self.provider.pairing_eq(h, public_key, signature, &self.g2)
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("g1", &self.g1)
            .field("g2", &self.g2)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::Scalar;

    #[test]
    fn single_instance_across_threads() {
        let handles = (0..8)
            .map(|_| std::thread::spawn(engine))
            .collect::<Vec<_>>();
        let first = engine();
        for handle in handles {
            let other = handle.join().unwrap();
            assert!(Arc::ptr_eq(&first, &other));
        }
    }

    #[test]
    fn generators_are_normalized() {
        let engine = engine();
        assert_eq!(engine.g1_generator().z(), &crate::FieldElement::ONE);
        assert_eq!(engine.g2_generator().z(), &crate::Fp2::ONE);
        assert_eq!(*engine.g2_generator(), G2Point::GENERATOR);
    }

    #[test]
    fn pairing_check() {
        let engine = engine();
        let secret = Scalar::from(42);
        let h = G1Point::GENERATOR * Scalar::from(7);
        let public_key = G2Point::GENERATOR * secret;
        let signature = h * secret;
        assert!(engine.verify_pairing(&h, &public_key, &signature));
        assert!(!engine.verify_pairing(&h, &public_key, &h));
    }
}
