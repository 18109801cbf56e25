/// Shared numeric helpers

/// Lamports in one SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert lamports to SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Signed lamport difference `post - pre` in SOL
pub fn lamport_delta_to_sol(pre: u64, post: u64) -> f64 {
    (post as i128 - pre as i128) as f64 / LAMPORTS_PER_SOL as f64
}
