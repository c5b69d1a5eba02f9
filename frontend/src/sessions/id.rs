use rand::Rng;

/// Builds a host-facing session id such as `BEG_042`.
///
/// The prefix is the first three characters of the uppercased player level
/// and the suffix is a random number in `000..=999`. Nothing checks the
/// result against ids already in use.
pub fn generate_session_id<R: Rng + ?Sized>(player_level: &str, rng: &mut R) -> String {
    let prefix: String = player_level.to_uppercase().chars().take(3).collect();
    let suffix: u16 = rng.gen_range(0..1000);
    format!("{prefix}_{suffix:03}")
}
