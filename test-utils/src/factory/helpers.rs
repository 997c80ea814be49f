//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique names and nicknames
/// across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates two players and a finished match between them won by the first player.
///
/// # Returns
/// - `Ok((winner, loser, game_match))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_with_players(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::player::Model,
        entity::player::Model,
        entity::game_match::Model,
    ),
    DbErr,
> {
    let winner = crate::factory::player::create_player(db).await?;
    let loser = crate::factory::player::create_player(db).await?;
    let game_match = crate::factory::game_match::MatchFactory::new(db, winner.id, loser.id)
        .winner(winner.id)
        .build()
        .await?;

    Ok((winner, loser, game_match))
}
