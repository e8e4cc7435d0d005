mod util;

use celtic_knot::prelude::*;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use util::*;

const W: usize = 4;
const H: usize = 4;
const LATTICE_EDGES: usize = (W - 1) * H + W * (H - 1);

fn check_weave(g: &MeshGraph) {
    let config = KnotConfig::default();
    let all = strands(g, &config);

    let mut right = vec![0usize; g.edge_count()];
    let mut left = vec![0usize; g.edge_count()];
    let mut total = 0;
    for strand in &all {
        assert!(strand.is_closed(), "strand from {:?} did not close", strand.start());
        assert_eq!(strand.start().side, Side::Right);
        for s in strand {
            match s.side {
                Side::Right => right[s.edge.index()] += 1,
                Side::Left => left[s.edge.index()] += 1,
            }
            assert!((length(s.tangent) - 1.0).abs() < 1e-9);
        }
        total += strand.len();
    }
    assert_eq!(total, 2 * g.edge_count());
    assert!(right.iter().all(|&c| c == 1), "right passes {right:?}");
    assert!(left.iter().all(|&c| c == 1), "left passes {left:?}");

    // Strands start at the lowest uncrossed edge, so starts ascend.
    let starts: Vec<u32> = all.iter().map(|s| s.start().edge.get()).collect();
    assert!(starts.windows(2).all(|w| w[0] < w[1]));
}

proptest! {
    #[test]
    fn lattice_subgraphs_weave_completely(
        keep in prop::collection::vec(any::<bool>(), LATTICE_EDGES),
        jitter in prop::collection::vec((-0.2f64..0.2, -0.2f64..0.2), W * H),
    ) {
        let g = lattice(W, H, &keep, &jitter);
        check_weave(&g);
    }

    #[test]
    fn weaving_is_deterministic(
        keep in prop::collection::vec(any::<bool>(), LATTICE_EDGES),
    ) {
        let g = lattice(W, H, &keep, &[]);
        let config = KnotConfig::default();
        prop_assert_eq!(
            weave_collect(&g, &config).unwrap(),
            weave_collect(&g, &config).unwrap()
        );
    }

    #[test]
    fn offset_moves_samples_off_the_plane(offset in 0.01f64..2.0) {
        let g = lattice(3, 3, &[], &[]);
        let config = KnotConfig::default().with_offset_distance(offset);
        for strand in strands(&g, &config) {
            for s in &strand {
                let want = s.side.sign() * offset;
                prop_assert!((s.point[2] - want).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn random_large_lattice() {
    let (w, h) = (12, 9);
    let count = (w - 1) * h + w * (h - 1);
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let keep: Vec<bool> = (0..count).map(|_| rng.gen_bool(0.7)).collect();
    let jitter: Vec<(f64, f64)> = (0..w * h)
        .map(|_| (rng.gen_range(-0.2..0.2), rng.gen_range(-0.2..0.2)))
        .collect();
    check_weave(&lattice(w, h, &keep, &jitter));
}
