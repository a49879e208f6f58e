// Confetti particle simulation. Drawing lives in components::confetti_canvas.
use rand::Rng;

pub const CONFETTI_PIECES: usize = 80;
pub const CONFETTI_FRAMES: u32 = 140;
pub const GRAVITY: f64 = 0.06;
pub const PALETTE: [&str; 5] = ["#0B6BFF", "#2E9DF7", "#4FCBFF", "#BFE6FF", "#7FDBFF"];

#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub vx: f64,
    pub vy: f64,
    /// Degrees.
    pub rot: f64,
    pub color: &'static str,
}

#[derive(Clone, Debug)]
pub struct ConfettiBurst {
    pub pieces: Vec<Piece>,
    pub frame: u32,
}

impl ConfettiBurst {
    /// Scatters `count` pieces across a `width`×`height` canvas, starting one
    /// canvas-height above the top edge.
    pub fn new<R: Rng>(rng: &mut R, width: f64, height: f64, count: usize) -> Self {
        let pieces = (0..count)
            .map(|_| Piece {
                x: rng.random::<f64>() * width,
                y: rng.random::<f64>() * height - height,
                w: 6.0 + rng.random::<f64>() * 8.0,
                h: 8.0 + rng.random::<f64>() * 10.0,
                vx: -2.0 + rng.random::<f64>() * 4.0,
                vy: 2.0 + rng.random::<f64>() * 4.0,
                rot: rng.random::<f64>() * 360.0,
                color: PALETTE[rng.random_range(0..PALETTE.len())],
            })
            .collect();
        Self { pieces, frame: 0 }
    }

    /// Advances one animation frame. Returns false once the burst is spent.
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.frame += 1;
        for p in &mut self.pieces {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY;
            p.rot += p.vx * 2.0;
        }
        !self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.frame >= CONFETTI_FRAMES
    }
}
