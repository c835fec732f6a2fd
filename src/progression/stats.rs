use schema::BaseStats;

/// Realized non-HP stat at `level`: `floor(base * 2 * level / 100 + 5)`.
pub fn compute_stat(base: u16, level: u8) -> u16 {
    let scaled = (base as u32 * 2 * level as u32) / 100 + 5;
    scaled.min(u16::MAX as u32) as u16
}

/// Realized max HP at `level`: `floor(base * 2 * level / 100 + level + 10)`.
pub fn compute_hp(base: u16, level: u8) -> u16 {
    let scaled = (base as u32 * 2 * level as u32) / 100 + level as u32 + 10;
    scaled.min(u16::MAX as u32) as u16
}

/// Full stat block for a species at `level`. The `hp` field holds max HP.
pub fn compute_stats(base: &BaseStats, level: u8) -> BaseStats {
    BaseStats {
        hp: compute_hp(base.hp, level),
        atk: compute_stat(base.atk, level),
        def: compute_stat(base.def, level),
        sp_atk: compute_stat(base.sp_atk, level),
        sp_def: compute_stat(base.sp_def, level),
        speed: compute_stat(base.speed, level),
    }
}
