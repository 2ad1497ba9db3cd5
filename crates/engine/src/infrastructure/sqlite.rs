//! SQLite-backed player storage.
//!
//! Predicates are translated to a `WHERE` clause, the sort directive to a
//! single-column `ORDER BY` and the page to `LIMIT`/`OFFSET`. Level and
//! until-next-level are persisted so level filters and ordering run in SQL;
//! on read they are rebuilt from experience.
//!
//! SQLite's `LOWER` only folds ASCII, so name and title are also stored
//! lowercased by Rust (`name_folded`, `title_folded`) and substring filters
//! match against those columns.

use async_trait::async_trait;
use roster_domain::{
    Birthday, Experience, NewPlayer, Player, PlayerId, PlayerName, PlayerOrder, PlayerPredicate,
    PlayerQuery, PlayerTitle, Profession, Race, RangeBound,
};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

const SELECT_PLAYERS: &str = "SELECT id, name, title, race, profession, birthday, banned, \
     experience, level, until_next_level FROM players";

/// SQLite implementation for player storage.
pub struct SqlitePlayerRepo {
    pool: SqlitePool,
}

impl SqlitePlayerRepo {
    /// Open (creating if needed) the database file at `db_path`.
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("players.connect", e))?;
        Self::with_pool(pool).await
    }

    /// Private in-memory database. A single pinned connection keeps it alive.
    pub async fn in_memory() -> Result<Self, RepoError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| RepoError::database("players.connect", e))?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, RepoError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                name_folded TEXT NOT NULL,
                title TEXT NOT NULL,
                title_folded TEXT NOT NULL,
                race TEXT NOT NULL,
                profession TEXT NOT NULL,
                birthday INTEGER NOT NULL,
                banned INTEGER NOT NULL DEFAULT 0,
                experience INTEGER NOT NULL,
                level INTEGER NOT NULL,
                until_next_level INTEGER NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("players.schema", e))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl PlayerRepo for SqlitePlayerRepo {
    async fn insert(&self, player: NewPlayer) -> Result<Player, RepoError> {
        let progression = player.progression();
        let result = sqlx::query(
            r#"
            INSERT INTO players
                (name, name_folded, title, title_folded, race, profession, birthday, banned,
                 experience, level, until_next_level)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(player.name().as_str())
        .bind(player.name().as_str().to_lowercase())
        .bind(player.title().as_str())
        .bind(player.title().as_str().to_lowercase())
        .bind(player.race().as_str())
        .bind(player.profession().as_str())
        .bind(player.birthday().as_millis())
        .bind(player.banned())
        .bind(progression.experience())
        .bind(progression.level())
        .bind(progression.until_next_level())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("players.insert", e))?;

        let id = PlayerId::new(result.last_insert_rowid())
            .map_err(|e| RepoError::database("players.insert", e))?;
        Ok(player.into_player(id))
    }

    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_PLAYERS))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.get", e))?;

        row.as_ref().map(row_to_player).transpose()
    }

    async fn save(&self, player: &Player) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE players SET
                name = ?, name_folded = ?, title = ?, title_folded = ?, race = ?,
                profession = ?, birthday = ?, banned = ?,
                experience = ?, level = ?, until_next_level = ?
            WHERE id = ?
            "#,
        )
        .bind(player.name().as_str())
        .bind(player.name().as_str().to_lowercase())
        .bind(player.title().as_str())
        .bind(player.title().as_str().to_lowercase())
        .bind(player.race().as_str())
        .bind(player.profession().as_str())
        .bind(player.birthday().as_millis())
        .bind(player.is_banned())
        .bind(player.experience())
        .bind(player.level())
        .bind(player.until_next_level())
        .bind(player.id().get())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("players.save", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: PlayerId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.delete", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn scan(&self, query: &PlayerQuery) -> Result<Vec<Player>, RepoError> {
        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_PLAYERS);
        push_where(&mut builder, &query.predicates);
        builder
            .push(" ORDER BY ")
            .push(order_column(query.order))
            .push(" LIMIT ")
            .push_bind(i64::from(query.page.size()))
            .push(" OFFSET ")
            .push_bind(i64::try_from(query.page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.scan", e))?;

        rows.iter().map(row_to_player).collect()
    }

    async fn count_matching(&self, predicates: &[PlayerPredicate]) -> Result<u64, RepoError> {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM players");
        push_where(&mut builder, predicates);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.count", e))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

fn order_column(order: PlayerOrder) -> &'static str {
    match order {
        PlayerOrder::Id => "id",
        PlayerOrder::Name => "name",
        PlayerOrder::Experience => "experience",
        PlayerOrder::Birthday => "birthday",
        PlayerOrder::Level => "level",
    }
}

fn push_where(builder: &mut QueryBuilder<'_, Sqlite>, predicates: &[PlayerPredicate]) {
    for (index, predicate) in predicates.iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        match predicate {
            PlayerPredicate::NameContains(needle) => {
                builder
                    .push("name_folded LIKE ")
                    .push_bind(like_pattern(needle))
                    .push(" ESCAPE '\\'");
            }
            PlayerPredicate::TitleContains(needle) => {
                builder
                    .push("title_folded LIKE ")
                    .push_bind(like_pattern(needle))
                    .push(" ESCAPE '\\'");
            }
            PlayerPredicate::RaceIs(race) => {
                builder.push("race = ").push_bind(race.as_str());
            }
            PlayerPredicate::ProfessionIs(profession) => {
                builder.push("profession = ").push_bind(profession.as_str());
            }
            PlayerPredicate::Experience(bound) => push_range(builder, "experience", widen(*bound)),
            PlayerPredicate::Birthday(bound) => push_range(builder, "birthday", *bound),
            PlayerPredicate::BannedIs(banned) => {
                builder.push("banned = ").push_bind(*banned);
            }
            PlayerPredicate::Level(bound) => push_range(builder, "level", widen(*bound)),
        }
    }
}

fn push_range(builder: &mut QueryBuilder<'_, Sqlite>, column: &'static str, bound: RangeBound<i64>) {
    builder.push(column);
    match bound {
        RangeBound::Between(min, max) => {
            builder
                .push(" BETWEEN ")
                .push_bind(min)
                .push(" AND ")
                .push_bind(max);
        }
        RangeBound::AtLeast(min) => {
            builder.push(" >= ").push_bind(min);
        }
        RangeBound::AtMost(max) => {
            builder.push(" <= ").push_bind(max);
        }
    }
}

fn widen(bound: RangeBound<i32>) -> RangeBound<i64> {
    match bound {
        RangeBound::Between(min, max) => RangeBound::Between(i64::from(min), i64::from(max)),
        RangeBound::AtLeast(min) => RangeBound::AtLeast(i64::from(min)),
        RangeBound::AtMost(max) => RangeBound::AtMost(i64::from(max)),
    }
}

/// `%needle%` with LIKE wildcards in the needle escaped.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn row_to_player(row: &SqliteRow) -> Result<Player, RepoError> {
    let column = |e: sqlx::Error| RepoError::corrupt(e);

    let id: i64 = row.try_get("id").map_err(column)?;
    let name: String = row.try_get("name").map_err(column)?;
    let title: String = row.try_get("title").map_err(column)?;
    let race: String = row.try_get("race").map_err(column)?;
    let profession: String = row.try_get("profession").map_err(column)?;
    let birthday: i64 = row.try_get("birthday").map_err(column)?;
    let banned: bool = row.try_get("banned").map_err(column)?;
    let experience: i32 = row.try_get("experience").map_err(column)?;

    let player = NewPlayer::new(
        PlayerName::new(name).map_err(RepoError::corrupt)?,
        PlayerTitle::new(title).map_err(RepoError::corrupt)?,
        race.parse::<Race>().map_err(RepoError::corrupt)?,
        profession.parse::<Profession>().map_err(RepoError::corrupt)?,
        Birthday::from_stored_millis(birthday).map_err(RepoError::corrupt)?,
        Experience::new(experience).map_err(RepoError::corrupt)?,
    )
    .with_banned(banned);

    Ok(player.into_player(PlayerId::new(id).map_err(RepoError::corrupt)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{birthday_in, sample_player};
    use roster_domain::{PageRequest, PlayerFilter};

    async fn seeded() -> SqlitePlayerRepo {
        let repo = SqlitePlayerRepo::in_memory().await.expect("open");
        let players = [
            sample_player("Aragorn", Race::Human, 5_000),
            sample_player("legolas", Race::Elf, 120_000),
            sample_player("Gimli", Race::Dwarf, 40_000).with_banned(true),
            sample_player("100%_Orc", Race::Orc, 0),
        ];
        for player in players {
            repo.insert(player).await.expect("insert");
        }
        repo
    }

    async fn names(repo: &SqlitePlayerRepo, filter: PlayerFilter) -> Vec<String> {
        repo.scan(&PlayerQuery::compose(&filter))
            .await
            .expect("scan")
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("a%b_c\\"), "%a\\%b\\_c\\\\%");
    }

    #[tokio::test]
    async fn insert_get_round_trip_preserves_progression() {
        let repo = SqlitePlayerRepo::in_memory().await.expect("open");
        let stored = repo
            .insert(sample_player("Frodo", Race::Hobbit, 1_000))
            .await
            .expect("insert");

        let loaded = repo.get(stored.id()).await.expect("get").expect("present");
        assert_eq!(loaded, stored);
        assert_eq!((loaded.level(), loaded.until_next_level()), (4, 500));
    }

    #[tokio::test]
    async fn save_overwrites_and_delete_reports_presence() {
        let repo = SqlitePlayerRepo::in_memory().await.expect("open");
        let mut player = repo
            .insert(sample_player("Sam", Race::Hobbit, 10))
            .await
            .expect("insert");

        player.set_banned(true);
        assert!(repo.save(&player).await.expect("save"));
        let loaded = repo.get(player.id()).await.expect("get").expect("present");
        assert!(loaded.is_banned());

        assert!(repo.delete(player.id()).await.expect("delete"));
        assert!(!repo.delete(player.id()).await.expect("delete again"));
        assert!(repo.get(player.id()).await.expect("get").is_none());
        assert!(!repo.save(&player).await.expect("save after delete"));
    }

    #[tokio::test]
    async fn name_filter_folds_non_ascii_case() {
        let repo = seeded().await;
        repo.insert(sample_player("Ärwen", Race::Elf, 10))
            .await
            .expect("insert");

        let filter = PlayerFilter::default()
            .with_name("ärw")
            .with_page(PageRequest::new(0, 10).expect("page"));
        assert_eq!(names(&repo, filter).await, vec!["Ärwen"]);
    }

    #[tokio::test]
    async fn renamed_player_is_found_by_new_folded_name() {
        let repo = SqlitePlayerRepo::in_memory().await.expect("open");
        let mut player = repo
            .insert(sample_player("Eowyn", Race::Human, 10))
            .await
            .expect("insert");
        player.set_name(PlayerName::new("ÉOWYN").expect("name"));
        repo.save(&player).await.expect("save");

        let filter = PlayerFilter::default().with_name("éow");
        assert_eq!(names(&repo, filter).await, vec!["ÉOWYN"]);
    }

    #[tokio::test]
    async fn stored_birthday_is_not_rechecked_against_local_year() {
        let repo = SqlitePlayerRepo::in_memory().await.expect("open");
        sqlx::query(
            r#"
            INSERT INTO players
                (name, name_folded, title, title_folded, race, profession, birthday, banned,
                 experience, level, until_next_level)
            VALUES ('Old', 'old', 'Elder', 'elder', 'TROLL', 'DRUID', 0, 0, 0, 0, 100)
            "#,
        )
        .execute(&repo.pool)
        .await
        .expect("raw insert");

        let id = PlayerId::new(1).expect("id");
        let loaded = repo.get(id).await.expect("decodes").expect("present");
        assert_eq!(loaded.birthday().as_millis(), 0);
    }

    #[tokio::test]
    async fn name_filter_is_case_insensitive_substring() {
        let repo = seeded().await;
        let filter = PlayerFilter::default()
            .with_name("LEG")
            .with_page(PageRequest::new(0, 10).expect("page"));
        assert_eq!(names(&repo, filter).await, vec!["legolas"]);
    }

    #[tokio::test]
    async fn like_wildcards_in_needle_match_literally() {
        let repo = seeded().await;
        let filter = PlayerFilter::default()
            .with_name("%_")
            .with_page(PageRequest::new(0, 10).expect("page"));
        assert_eq!(names(&repo, filter).await, vec!["100%_Orc"]);
    }

    #[tokio::test]
    async fn ranges_banned_and_order_apply_in_sql() {
        let repo = seeded().await;
        let filter = PlayerFilter::default()
            .with_experience_range(1_000, 0)
            .with_banned(false)
            .with_order(PlayerOrder::Experience)
            .with_page(PageRequest::new(0, 10).expect("page"));
        assert_eq!(names(&repo, filter).await, vec!["Aragorn", "legolas"]);
    }

    #[tokio::test]
    async fn pages_slice_the_sorted_sequence() {
        let repo = seeded().await;
        let page = |number| {
            PlayerFilter::default()
                .with_order(PlayerOrder::Name)
                .with_page(PageRequest::new(number, 3).expect("page"))
        };
        assert_eq!(
            names(&repo, page(0)).await,
            vec!["100%_Orc", "Aragorn", "Gimli"]
        );
        assert_eq!(names(&repo, page(1)).await, vec!["legolas"]);
        assert!(names(&repo, page(2)).await.is_empty());
    }

    #[tokio::test]
    async fn count_ignores_paging() {
        let repo = seeded().await;
        let query = PlayerQuery::compose(
            &PlayerFilter::default()
                .with_level_range(1, 0)
                .with_page(PageRequest::new(0, 1).expect("page")),
        );
        assert_eq!(repo.scan(&query).await.expect("scan").len(), 1);
        assert_eq!(repo.count_matching(&query.predicates).await.expect("count"), 3);
    }

    #[tokio::test]
    async fn birthday_range_filters_on_epoch_millis() {
        let repo = SqlitePlayerRepo::in_memory().await.expect("open");
        repo.insert(sample_player("Old", Race::Troll, 0).with_birthday(birthday_in(2001)))
            .await
            .expect("insert");
        repo.insert(sample_player("Young", Race::Troll, 0).with_birthday(birthday_in(2020)))
            .await
            .expect("insert");

        let after = birthday_in(2010).as_millis();
        let filter = PlayerFilter::default().with_birthday_range(after, 0);
        assert_eq!(names(&repo, filter).await, vec!["Young"]);
    }

    #[tokio::test]
    async fn file_database_persists_across_reopen() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let db_path = temp_dir.path().join("players.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let id = {
            let repo = SqlitePlayerRepo::new(&db_path_str).await.expect("open");
            repo.insert(sample_player("Boromir", Race::Human, 2_500))
                .await
                .expect("insert")
                .id()
        };

        let repo = SqlitePlayerRepo::new(&db_path_str).await.expect("reopen");
        let loaded = repo.get(id).await.expect("get").expect("present");
        assert_eq!(loaded.name().as_str(), "Boromir");
        assert_eq!(loaded.experience(), 2_500);
    }
}
