use std::path::PathBuf;

use anyhow::{Context, Result};
use plot_img::data::loader::{encode_f32_ne, write_raw};
use plot_img::data::model::{ImageGrid, IMG_EDGE};

/// Distance from point `(r, c)` to the segment `a`–`b`.
fn segment_distance(r: f32, c: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dr, dc) = (b.0 - a.0, b.1 - a.1);
    let len2 = dr * dr + dc * dc;
    let t = (((r - a.0) * dr + (c - a.1) * dc) / len2).clamp(0.0, 1.0);
    let (pr, pc) = (a.0 + t * dr, a.1 + t * dc);
    ((r - pr).powi(2) + (c - pc).powi(2)).sqrt()
}

/// Soft pen stroke: 1 on the line, fading to 0 at `width`.
fn stroke(dist: f32, width: f32) -> f32 {
    (1.0 - dist / width).clamp(0.0, 1.0)
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

fn samples() -> Vec<(&'static str, ImageGrid)> {
    let center = (IMG_EDGE as f32 - 1.0) / 2.0;
    let mut rng = SimpleRng::new(42);

    vec![
        (
            "gradient",
            ImageGrid::from_fn(|r, c| (r + c) as f32 / (2 * (IMG_EDGE - 1)) as f32),
        ),
        (
            "ring",
            ImageGrid::from_fn(|r, c| {
                let d = ((r as f32 - center).powi(2) + (c as f32 - center).powi(2)).sqrt();
                stroke((d - 9.0).abs(), 2.5)
            }),
        ),
        (
            "seven",
            ImageGrid::from_fn(|r, c| {
                let (r, c) = (r as f32, c as f32);
                let top = segment_distance(r, c, (6.0, 7.0), (6.0, 20.0));
                let diagonal = segment_distance(r, c, (6.0, 20.0), (22.0, 11.0));
                stroke(top.min(diagonal), 1.8)
            }),
        ),
        (
            "noise",
            ImageGrid::from_fn(|_, _| rng.next_f32()),
        ),
    ]
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("samples"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for (name, grid) in samples() {
        let path = out_dir.join(format!("{name}.bin"));
        write_raw(&path, &grid).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    // Deliberately truncated: exercises the length check.
    let short = out_dir.join("short.bin");
    std::fs::write(&short, encode_f32_ne(&[0.5; 100]))
        .with_context(|| format!("writing {}", short.display()))?;
    println!("Wrote {} (invalid length)", short.display());

    Ok(())
}
