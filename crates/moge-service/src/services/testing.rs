//! In-memory repositories for service tests

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use moge_common::JwtService;
use moge_core::traits::{
    BoardRepository, CertificationRepository, CommentRepository, FollowRepository,
    QuizRepository, ReactionRepository, RepoResult, UserRepository,
};
use moge_core::{
    Board, BoardSummary, Category, Comment, CommentKind, CommentStatus, DomainError,
    EmailCertification, EntityId, Follow, FollowUser, NewBoard, NewComment, NewQuiz, NewUser,
    Quiz, Reaction, ReactionKey, ReactionSubject, ToggleAction, ToggleState, User,
};
use parking_lot::Mutex;

use super::context::{ServiceContext, ServiceContextBuilder, ServiceSettings};

const CATEGORIES: [&str; 8] = [
    "history", "science", "sports", "music", "movie", "game", "language", "general",
];

#[derive(Default)]
struct State {
    next_id: i64,
    writes: usize,
    users: BTreeMap<i64, (User, String, bool)>,
    keywords: HashMap<i64, Vec<i64>>,
    boards: BTreeMap<i64, Board>,
    quizzes: Vec<Quiz>,
    comments: BTreeMap<i64, Comment>,
    reactions: HashMap<ReactionKey, Reaction>,
    follows: HashMap<(i64, i64), Follow>,
    certifications: HashMap<String, EmailCertification>,
}

impl State {
    fn next_id(&mut self) -> EntityId {
        self.next_id += 1;
        EntityId::new(self.next_id)
    }

    fn live_user(&self, id: EntityId) -> Option<&User> {
        self.users
            .get(&id.into_inner())
            .filter(|(_, _, deleted)| !deleted)
            .map(|(user, _, _)| user)
    }

    fn like_count(&self, subject: ReactionSubject, id: EntityId) -> i64 {
        self.reactions
            .values()
            .filter(|r| r.key.subject == subject && r.key.subject_id == id && r.active)
            .count() as i64
    }

    fn summary(&self, board: &Board) -> BoardSummary {
        let category_name = CATEGORIES
            .get((board.category_id.into_inner() - 1) as usize)
            .map_or_else(String::new, |name| (*name).to_string());
        BoardSummary {
            board_id: board.id,
            title: board.title.clone(),
            category_name,
            quiz_count: self.quizzes.iter().filter(|q| q.board_id == board.id).count() as i64,
            view_count: board.view_count,
            like_count: self.like_count(ReactionSubject::Board, board.id),
        }
    }

    fn follow_list(
        &self,
        pick: impl Fn(&Follow) -> Option<EntityId>,
        limit: i64,
        offset: i64,
    ) -> Vec<FollowUser> {
        let mut rows: Vec<&Follow> = self.follows.values().filter(|f| f.active).collect();
        rows.sort_by_key(|f| f.created_at);
        rows.into_iter()
            .filter_map(|f| pick(f))
            .filter_map(|id| self.live_user(id))
            .skip(offset as usize)
            .take(limit as usize)
            .map(|u| FollowUser {
                user_id: u.id,
                nickname: u.nickname.clone(),
                profile_image: u.profile_image.clone(),
            })
            .collect()
    }
}

/// Every repository backed by one mutex-guarded state
#[derive(Default)]
pub(crate) struct InMemoryDb {
    state: Mutex<State>,
}

impl InMemoryDb {
    /// Number of mutating calls that stored something
    pub(crate) fn writes(&self) -> usize {
        self.state.lock().writes
    }

    pub(crate) fn seed_user(&self, email: &str, nickname: &str) -> EntityId {
        let mut state = self.state.lock();
        let id = state.next_id();
        let user = User::new(id, email.to_string(), nickname.to_string());
        state.users.insert(id.into_inner(), (user, String::new(), false));
        id
    }

    pub(crate) fn seed_board(&self, author_id: EntityId, title: &str) -> EntityId {
        let mut state = self.state.lock();
        let id = state.next_id();
        let now = Utc::now();
        state.boards.insert(
            id.into_inner(),
            Board {
                id,
                author_id,
                category_id: EntityId::new(1),
                title: title.to_string(),
                view_count: 0,
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    /// Force a board id so tests can use fixed subjects
    pub(crate) fn seed_board_with_id(&self, id: EntityId, author_id: EntityId) {
        let mut state = self.state.lock();
        let now = Utc::now();
        state.next_id = state.next_id.max(id.into_inner());
        state.boards.insert(
            id.into_inner(),
            Board {
                id,
                author_id,
                category_id: EntityId::new(1),
                title: "fixed".to_string(),
                view_count: 0,
                created_at: now,
                updated_at: now,
            },
        );
    }

    /// Force a user id so tests can use fixed callers
    pub(crate) fn seed_user_with_id(&self, id: EntityId, nickname: &str) {
        let mut state = self.state.lock();
        state.next_id = state.next_id.max(id.into_inner());
        let user = User::new(id, format!("{nickname}@moge.dev"), nickname.to_string());
        state.users.insert(id.into_inner(), (user, String::new(), false));
    }

    pub(crate) fn backdate_certification(&self, email: &str, issued_at: DateTime<Utc>) {
        if let Some(cert) = self.state.lock().certifications.get_mut(email) {
            cert.issued_at = issued_at;
        }
    }

    pub(crate) fn comment(&self, id: EntityId) -> Option<Comment> {
        self.state.lock().comments.get(&id.into_inner()).cloned()
    }
}

/// Build a context whose repositories all share `db`
pub(crate) fn context_with(db: &Arc<InMemoryDb>, settings: ServiceSettings) -> ServiceContext {
    ServiceContextBuilder::new()
        .user_repo(db.clone())
        .board_repo(db.clone())
        .quiz_repo(db.clone())
        .comment_repo(db.clone())
        .reaction_repo(db.clone())
        .follow_repo(db.clone())
        .certification_repo(db.clone())
        .jwt_service(Arc::new(JwtService::new("test-secret-key", 3600)))
        .settings(settings)
        .build()
        .expect("all repositories set")
}

pub(crate) fn context() -> (Arc<InMemoryDb>, ServiceContext) {
    let db = Arc::new(InMemoryDb::default());
    let ctx = context_with(&db, ServiceSettings::default());
    (db, ctx)
}

#[async_trait]
impl UserRepository for InMemoryDb {
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<User>> {
        Ok(self.state.lock().live_user(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .users
            .values()
            .find(|(u, _, deleted)| !deleted && u.email == email)
            .map(|(u, _, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn nickname_exists(&self, nickname: &str) -> RepoResult<bool> {
        Ok(self
            .state
            .lock()
            .users
            .values()
            .any(|(u, _, deleted)| !deleted && u.nickname == nickname))
    }

    async fn create(&self, user: &NewUser) -> RepoResult<EntityId> {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.writes += 1;
        let entity = User::new(id, user.email.clone(), user.nickname.clone());
        state
            .users
            .insert(id.into_inner(), (entity, user.password_hash.clone(), false));
        Ok(id)
    }

    async fn get_password_hash(&self, id: EntityId) -> RepoResult<Option<String>> {
        Ok(self
            .state
            .lock()
            .users
            .get(&id.into_inner())
            .filter(|(_, _, deleted)| !deleted)
            .map(|(_, hash, _)| hash.clone()))
    }

    async fn update_password(&self, id: EntityId, password_hash: &str) -> RepoResult<bool> {
        let mut state = self.state.lock();
        state.writes += 1;
        Ok(match state.users.get_mut(&id.into_inner()) {
            Some((_, hash, false)) => {
                *hash = password_hash.to_string();
                true
            }
            _ => false,
        })
    }

    async fn update_nickname(&self, id: EntityId, nickname: &str) -> RepoResult<bool> {
        let mut state = self.state.lock();
        state.writes += 1;
        Ok(match state.users.get_mut(&id.into_inner()) {
            Some((user, _, false)) => {
                user.set_nickname(nickname.to_string());
                true
            }
            _ => false,
        })
    }

    async fn clear_profile_image(&self, id: EntityId) -> RepoResult<bool> {
        let mut state = self.state.lock();
        Ok(match state.users.get_mut(&id.into_inner()) {
            Some((user, _, false)) => {
                user.profile_image = None;
                true
            }
            _ => false,
        })
    }

    async fn delete(&self, id: EntityId) -> RepoResult<bool> {
        let mut state = self.state.lock();
        Ok(match state.users.get_mut(&id.into_inner()) {
            Some((_, _, deleted)) if !*deleted => {
                *deleted = true;
                true
            }
            _ => false,
        })
    }

    async fn keywords(&self, user_id: EntityId) -> RepoResult<Vec<Category>> {
        let state = self.state.lock();
        Ok(state
            .keywords
            .get(&user_id.into_inner())
            .map(|ids| {
                ids.iter()
                    .map(|id| Category {
                        id: EntityId::new(*id),
                        name: CATEGORIES[(*id - 1) as usize].to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn replace_keywords(
        &self,
        user_id: EntityId,
        category_ids: &[EntityId],
    ) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.writes += 1;
        state.keywords.insert(
            user_id.into_inner(),
            category_ids.iter().map(|id| id.into_inner()).collect(),
        );
        Ok(())
    }
}

#[async_trait]
impl BoardRepository for InMemoryDb {
    async fn exists(&self, id: EntityId) -> RepoResult<bool> {
        Ok(self.state.lock().boards.contains_key(&id.into_inner()))
    }

    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Board>> {
        Ok(self.state.lock().boards.get(&id.into_inner()).cloned())
    }

    async fn create(&self, board: &NewBoard) -> RepoResult<EntityId> {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.writes += 1;
        let now = Utc::now();
        state.boards.insert(
            id.into_inner(),
            Board {
                id,
                author_id: board.author_id,
                category_id: board.category_id,
                title: board.title.clone(),
                view_count: 0,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn increment_view_count(&self, id: EntityId) -> RepoResult<bool> {
        let mut state = self.state.lock();
        Ok(match state.boards.get_mut(&id.into_inner()) {
            Some(board) => {
                board.view_count += 1;
                true
            }
            None => false,
        })
    }

    async fn category_exists(&self, id: EntityId) -> RepoResult<bool> {
        Ok((1..=CATEGORIES.len() as i64).contains(&id.into_inner()))
    }

    async fn top_by_likes(&self, limit: i64) -> RepoResult<Vec<BoardSummary>> {
        let state = self.state.lock();
        let mut rows: Vec<_> = state.boards.values().map(|b| state.summary(b)).collect();
        rows.sort_by(|a, b| b.like_count.cmp(&a.like_count));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn top_by_views(&self, limit: i64) -> RepoResult<Vec<BoardSummary>> {
        let state = self.state.lock();
        let mut rows: Vec<_> = state.boards.values().map(|b| state.summary(b)).collect();
        rows.sort_by(|a, b| b.view_count.cmp(&a.view_count));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn liked_by_user(&self, user_id: EntityId) -> RepoResult<Vec<BoardSummary>> {
        let state = self.state.lock();
        Ok(state
            .boards
            .values()
            .filter(|b| {
                state
                    .reactions
                    .get(&ReactionKey::board(b.id, user_id))
                    .is_some_and(|r| r.active)
            })
            .map(|b| state.summary(b))
            .collect())
    }

    async fn by_author(&self, user_id: EntityId) -> RepoResult<Vec<BoardSummary>> {
        let state = self.state.lock();
        Ok(state
            .boards
            .values()
            .filter(|b| b.author_id == user_id)
            .map(|b| state.summary(b))
            .collect())
    }
}

#[async_trait]
impl QuizRepository for InMemoryDb {
    async fn create(&self, quiz: &NewQuiz) -> RepoResult<EntityId> {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.writes += 1;
        state.quizzes.push(Quiz {
            id,
            board_id: quiz.board_id,
            question: quiz.question.clone(),
            quiz_type: quiz.quiz_type,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_by_board(&self, board_id: EntityId) -> RepoResult<Vec<Quiz>> {
        Ok(self
            .state
            .lock()
            .quizzes
            .iter()
            .filter(|q| q.board_id == board_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CommentRepository for InMemoryDb {
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Comment>> {
        Ok(self.comment(id))
    }

    async fn find_by_board(&self, board_id: EntityId) -> RepoResult<Vec<Comment>> {
        let mut rows: Vec<Comment> = self
            .state
            .lock()
            .comments
            .values()
            .filter(|c| c.board_id == board_id)
            .cloned()
            .collect();
        rows.sort_by_key(|c| (c.group_id, c.is_reply(), c.id));
        Ok(rows)
    }

    async fn find_group_head(
        &self,
        board_id: EntityId,
        group_id: i64,
    ) -> RepoResult<Option<Comment>> {
        Ok(self
            .state
            .lock()
            .comments
            .values()
            .find(|c| c.board_id == board_id && c.group_id == group_id && !c.is_reply())
            .cloned())
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<EntityId> {
        let mut state = self.state.lock();
        let duplicate = comment.kind == CommentKind::TopLevel
            && state.comments.values().any(|c| {
                c.board_id == comment.board_id && c.group_id == comment.group_id && !c.is_reply()
            });
        if duplicate {
            return Err(DomainError::DuplicateGroupParent(comment.group_id));
        }
        let id = state.next_id();
        state.writes += 1;
        let now = Utc::now();
        state.comments.insert(
            id.into_inner(),
            Comment {
                id,
                board_id: comment.board_id,
                author_id: comment.author_id,
                content: comment.content.clone(),
                group_id: comment.group_id,
                kind: comment.kind,
                parent_id: comment.parent_id,
                status: CommentStatus::Active,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn create_in_next_group(
        &self,
        board_id: EntityId,
        author_id: EntityId,
        content: &str,
    ) -> RepoResult<(EntityId, i64)> {
        let mut state = self.state.lock();
        if !state.boards.contains_key(&board_id.into_inner()) {
            return Err(DomainError::SubjectNotFound {
                subject: ReactionSubject::Board,
                id: board_id,
            });
        }
        let group_id = state
            .comments
            .values()
            .filter(|c| c.board_id == board_id)
            .map(|c| c.group_id)
            .max()
            .unwrap_or(0)
            + 1;
        let id = state.next_id();
        state.writes += 1;
        let now = Utc::now();
        state.comments.insert(
            id.into_inner(),
            Comment {
                id,
                board_id,
                author_id,
                content: content.to_string(),
                group_id,
                kind: CommentKind::TopLevel,
                parent_id: None,
                status: CommentStatus::Active,
                created_at: now,
                updated_at: now,
            },
        );
        Ok((id, group_id))
    }

    async fn update_content(&self, id: EntityId, content: &str) -> RepoResult<bool> {
        let mut state = self.state.lock();
        Ok(match state.comments.get_mut(&id.into_inner()) {
            Some(c) if !c.is_deleted() => {
                c.content = content.to_string();
                c.updated_at = Utc::now();
                true
            }
            _ => false,
        })
    }

    async fn has_replies(&self, id: EntityId) -> RepoResult<bool> {
        Ok(self
            .state
            .lock()
            .comments
            .values()
            .any(|c| c.parent_id == Some(id)))
    }

    async fn delete(&self, id: EntityId) -> RepoResult<bool> {
        Ok(self.state.lock().comments.remove(&id.into_inner()).is_some())
    }

    async fn mark_deleted(&self, id: EntityId) -> RepoResult<bool> {
        let mut state = self.state.lock();
        Ok(match state.comments.get_mut(&id.into_inner()) {
            Some(c) => {
                c.status = CommentStatus::Deleted;
                true
            }
            None => false,
        })
    }
}

#[async_trait]
impl ReactionRepository for InMemoryDb {
    async fn toggle(&self, key: ReactionKey) -> RepoResult<ToggleAction> {
        let mut state = self.state.lock();
        let subject_exists = match key.subject {
            ReactionSubject::Board => state.boards.contains_key(&key.subject_id.into_inner()),
            ReactionSubject::Comment => state
                .comments
                .get(&key.subject_id.into_inner())
                .is_some_and(|c| !c.is_deleted()),
        };
        if !subject_exists {
            return Err(DomainError::SubjectNotFound {
                subject: key.subject,
                id: key.subject_id,
            });
        }

        let stored = state.reactions.get(&key).map(|r| r.active);
        let transition = ToggleState::from_stored(stored).toggle();
        let now = Utc::now();
        state.writes += 1;
        let row = state.reactions.entry(key).or_insert(Reaction {
            key,
            active: false,
            created_at: now,
            updated_at: now,
        });
        row.active = transition.to.is_active();
        row.updated_at = now;
        Ok(transition.action)
    }

    async fn find(&self, key: ReactionKey) -> RepoResult<Option<Reaction>> {
        Ok(self.state.lock().reactions.get(&key).cloned())
    }

    async fn count_active(
        &self,
        subject: ReactionSubject,
        subject_id: EntityId,
    ) -> RepoResult<i64> {
        Ok(self.state.lock().like_count(subject, subject_id))
    }
}

#[async_trait]
impl FollowRepository for InMemoryDb {
    async fn toggle(
        &self,
        follower_id: EntityId,
        following_id: EntityId,
    ) -> RepoResult<ToggleAction> {
        let mut state = self.state.lock();
        if state.live_user(following_id).is_none() {
            return Err(DomainError::UserNotFound(following_id));
        }
        let pair = (follower_id.into_inner(), following_id.into_inner());
        let stored = state.follows.get(&pair).map(|f| f.active);
        let transition = ToggleState::from_stored(stored).toggle();
        let now = Utc::now();
        state.writes += 1;
        let row = state.follows.entry(pair).or_insert(Follow {
            follower_id,
            following_id,
            active: false,
            created_at: now,
            updated_at: now,
        });
        row.active = transition.to.is_active();
        row.updated_at = now;
        Ok(transition.action)
    }

    async fn find(
        &self,
        follower_id: EntityId,
        following_id: EntityId,
    ) -> RepoResult<Option<Follow>> {
        Ok(self
            .state
            .lock()
            .follows
            .get(&(follower_id.into_inner(), following_id.into_inner()))
            .cloned())
    }

    async fn followings(
        &self,
        user_id: EntityId,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<FollowUser>> {
        Ok(self.state.lock().follow_list(
            |f| (f.follower_id == user_id).then_some(f.following_id),
            limit,
            offset,
        ))
    }

    async fn followers(
        &self,
        user_id: EntityId,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<FollowUser>> {
        Ok(self.state.lock().follow_list(
            |f| (f.following_id == user_id).then_some(f.follower_id),
            limit,
            offset,
        ))
    }

    async fn follower_count(&self, user_id: EntityId) -> RepoResult<i64> {
        Ok(self
            .state
            .lock()
            .follows
            .values()
            .filter(|f| f.active && f.following_id == user_id)
            .count() as i64)
    }

    async fn following_count(&self, user_id: EntityId) -> RepoResult<i64> {
        Ok(self
            .state
            .lock()
            .follows
            .values()
            .filter(|f| f.active && f.follower_id == user_id)
            .count() as i64)
    }
}

#[async_trait]
impl CertificationRepository for InMemoryDb {
    async fn upsert(&self, email: &str, code: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.writes += 1;
        state.certifications.insert(
            email.to_string(),
            EmailCertification {
                email: email.to_string(),
                code: code.to_string(),
                issued_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn find(&self, email: &str) -> RepoResult<Option<EmailCertification>> {
        Ok(self.state.lock().certifications.get(email).cloned())
    }
}

/// Shorthand for a window in the past
pub(crate) fn seconds_ago(secs: i64) -> DateTime<Utc> {
    Utc::now() - Duration::seconds(secs)
}
