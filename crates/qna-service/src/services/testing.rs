//! In-memory repositories for service tests

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use qna_common::auth::hash_password;
use qna_common::{object_key, AppResult, JwtService, ObjectStore};
use qna_core::entities::{
    Comment, FeedEntry, NewPost, OxPost, PollState, Post, QnaPost, Session, User, UserSearchHit,
    UserSummary,
};
use qna_core::traits::{
    CommentRepository, FeedRepository, FeedScope, FollowRepository, MarkRepository,
    PostRepository, RepoResult, SessionRepository, UserRepository, VoteRepository,
};
use qna_core::value_objects::{Mark, PostKind, PostRef, Toggled, VoteTally};
use qna_core::DomainError;
use sqlx::postgres::PgPoolOptions;

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    users: BTreeMap<String, (User, String)>,
    /// (follower, following)
    follows: BTreeSet<(String, String)>,
    qna: BTreeMap<i64, QnaPost>,
    ox: BTreeMap<i64, OxPost>,
    next_post_id: i64,
    marks: HashSet<(Mark, String, PostRef)>,
    votes: HashMap<(String, i64), bool>,
    comments: Vec<Comment>,
    sessions: HashMap<String, Session>,
    uploads: Vec<String>,
}

impl State {
    fn post(&self, post: PostRef) -> Option<Post> {
        match post.kind {
            PostKind::Qna => self.qna.get(&post.id).cloned().map(Post::Qna),
            PostKind::Ox => self.ox.get(&post.id).cloned().map(Post::Ox),
        }
    }

    fn posts(&self, kind: PostKind) -> Vec<Post> {
        let mut posts: Vec<Post> = match kind {
            PostKind::Qna => self.qna.values().cloned().map(Post::Qna).collect(),
            PostKind::Ox => self.ox.values().cloned().map(Post::Ox).collect(),
        };
        posts.sort_by_key(|p| std::cmp::Reverse((p.created_at(), p.id())));
        posts
    }

    fn name_of(&self, user_id: &str) -> String {
        self.users
            .get(user_id)
            .map(|(u, _)| u.name.clone())
            .unwrap_or_default()
    }

    fn summary(&self, user_id: &str) -> UserSummary {
        UserSummary {
            id: user_id.to_string(),
            name: self.name_of(user_id),
        }
    }

    fn insert_post(&mut self, new_post: &NewPost) -> Post {
        self.next_post_id += 1;
        let now = Utc::now();
        match new_post.kind {
            PostKind::Qna => {
                let post = QnaPost {
                    id: self.next_post_id,
                    author: new_post.author.clone(),
                    content: new_post.content.clone(),
                    created_at: now,
                    updated_at: now,
                };
                self.qna.insert(post.id, post.clone());
                Post::Qna(post)
            }
            PostKind::Ox => {
                let post = OxPost {
                    id: self.next_post_id,
                    author: new_post.author.clone(),
                    content: new_post.content.clone(),
                    o_count: 0,
                    x_count: 0,
                    created_at: now,
                    updated_at: now,
                };
                self.ox.insert(post.id, post.clone());
                Post::Ox(post)
            }
        }
    }
}

/// Every repository backed by one shared map set
#[derive(Default)]
pub(crate) struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub(crate) fn uploaded_count(&self) -> usize {
        self.state.lock().unwrap().uploads.len()
    }
}

/// Service context over a fresh [`MemoryStore`]
///
/// The pool is lazy and never connects.
pub(crate) fn memory_context() -> (ServiceContext, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/qna_unused")
        .unwrap();

    let ctx = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(store.clone())
        .follow_repo(store.clone())
        .post_repo(store.clone())
        .mark_repo(store.clone())
        .vote_repo(store.clone())
        .comment_repo(store.clone())
        .feed_repo(store.clone())
        .session_repo(store.clone())
        .jwt_service(Arc::new(JwtService::new("service-test-secret", 900, 3600)))
        .object_store(store.clone())
        .build()
        .unwrap();

    (ctx, store)
}

/// Register `id` with display name `{id}-name`
pub(crate) fn seed_user(store: &MemoryStore, id: &str, password: &str) {
    let user = User::new(id.to_string(), format!("{id}-name"), "KR".to_string());
    let hash = hash_password(password).unwrap();
    store
        .state
        .lock()
        .unwrap()
        .users
        .insert(id.to_string(), (user, hash));
}

/// Insert a post and return its id
pub(crate) fn seed_post(store: &MemoryStore, kind: PostKind, author: &str, content: &str) -> i64 {
    store
        .state
        .lock()
        .unwrap()
        .insert_post(&NewPost::new(kind, author, content))
        .id()
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(id).map(|(u, _)| u.clone()))
    }

    async fn exists(&self, id: &str) -> RepoResult<bool> {
        Ok(self.state.lock().unwrap().users.contains_key(id))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.users.contains_key(&user.id) {
            return Err(DomainError::UserIdTaken);
        }
        state
            .users
            .insert(user.id.clone(), (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update_profile(&self, id: &str, name: &str, country: &str) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let (user, _) = state
            .users
            .get_mut(id)
            .ok_or_else(|| DomainError::UserNotFound(id.to_string()))?;
        user.set_profile(name.to_string(), country.to_string());
        Ok(())
    }

    async fn get_password_hash(&self, id: &str) -> RepoResult<Option<String>> {
        Ok(self.state.lock().unwrap().users.get(id).map(|(_, h)| h.clone()))
    }

    async fn update_password(&self, id: &str, password_hash: &str) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let (_, hash) = state
            .users
            .get_mut(id)
            .ok_or_else(|| DomainError::UserNotFound(id.to_string()))?;
        *hash = password_hash.to_string();
        Ok(())
    }

    async fn search_with_follow_state(
        &self,
        viewer: &str,
        query: Option<&str>,
    ) -> RepoResult<Vec<UserSearchHit>> {
        let state = self.state.lock().unwrap();
        let query = query.map(str::to_lowercase);
        Ok(state
            .users
            .values()
            .map(|(u, _)| u)
            .filter(|u| {
                query.as_deref().map_or(true, |q| {
                    u.id.to_lowercase().contains(q) || u.name.to_lowercase().contains(q)
                })
            })
            .map(|u| UserSearchHit {
                id: u.id.clone(),
                name: u.name.clone(),
                followed: state.follows.contains(&(viewer.to_string(), u.id.clone())),
            })
            .collect())
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    async fn is_following(&self, follower: &str, following: &str) -> RepoResult<bool> {
        let edge = (follower.to_string(), following.to_string());
        Ok(self.state.lock().unwrap().follows.contains(&edge))
    }

    async fn toggle(&self, follower: &str, following: &str) -> RepoResult<Toggled> {
        if follower == following {
            return Err(DomainError::SelfFollow);
        }
        let mut state = self.state.lock().unwrap();
        let edge = (follower.to_string(), following.to_string());
        if state.follows.remove(&edge) {
            Ok(Toggled::Off)
        } else {
            state.follows.insert(edge);
            Ok(Toggled::On)
        }
    }

    async fn list_following(&self, user_id: &str) -> RepoResult<Vec<UserSummary>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .follows
            .iter()
            .filter(|(follower, _)| follower == user_id)
            .map(|(_, following)| state.summary(following))
            .collect())
    }

    async fn list_followers(&self, user_id: &str) -> RepoResult<Vec<UserSummary>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .follows
            .iter()
            .filter(|(_, following)| following == user_id)
            .map(|(follower, _)| state.summary(follower))
            .collect())
    }

    async fn counts(&self, user_id: &str) -> RepoResult<(i64, i64)> {
        let state = self.state.lock().unwrap();
        let followers = state.follows.iter().filter(|(_, f)| f == user_id).count();
        let following = state.follows.iter().filter(|(f, _)| f == user_id).count();
        Ok((followers as i64, following as i64))
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        Ok(self.state.lock().unwrap().insert_post(post))
    }

    async fn find_by_id(&self, post: PostRef) -> RepoResult<Option<Post>> {
        Ok(self.state.lock().unwrap().post(post))
    }

    async fn exists(&self, post: PostRef) -> RepoResult<bool> {
        Ok(self.state.lock().unwrap().post(post).is_some())
    }

    async fn list(&self, kind: PostKind, author: Option<&str>) -> RepoResult<Vec<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts(kind)
            .into_iter()
            .filter(|p| author.map_or(true, |a| p.is_authored_by(a)))
            .collect())
    }

    async fn list_by_followees(&self, kind: PostKind, user_id: &str) -> RepoResult<Vec<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts(kind)
            .into_iter()
            .filter(|p| {
                state
                    .follows
                    .contains(&(user_id.to_string(), p.author().to_string()))
            })
            .collect())
    }

    async fn update_content(&self, post: PostRef, content: &str) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let now = Utc::now();
        match post.kind {
            PostKind::Qna => {
                let p = state
                    .qna
                    .get_mut(&post.id)
                    .ok_or(DomainError::PostNotFound(post))?;
                p.content = content.to_string();
                p.updated_at = now;
            }
            PostKind::Ox => {
                let p = state
                    .ox
                    .get_mut(&post.id)
                    .ok_or(DomainError::PostNotFound(post))?;
                p.content = content.to_string();
                p.updated_at = now;
            }
        }
        Ok(())
    }

    async fn delete(&self, post: PostRef) -> RepoResult<()> {
        let mut state = self.state.lock().unwrap();
        let removed = match post.kind {
            PostKind::Qna => state.qna.remove(&post.id).is_some(),
            PostKind::Ox => state.ox.remove(&post.id).is_some(),
        };
        if !removed {
            return Err(DomainError::PostNotFound(post));
        }
        state.marks.retain(|(_, _, p)| *p != post);
        match post.kind {
            PostKind::Qna => state.comments.retain(|c| c.post_id != post.id),
            PostKind::Ox => state.votes.retain(|(_, id), _| *id != post.id),
        }
        Ok(())
    }
}

#[async_trait]
impl MarkRepository for MemoryStore {
    async fn toggle(&self, mark: Mark, user_id: &str, post: PostRef) -> RepoResult<Toggled> {
        let mut state = self.state.lock().unwrap();
        let key = (mark, user_id.to_string(), post);
        if state.marks.remove(&key) {
            Ok(Toggled::Off)
        } else {
            state.marks.insert(key);
            Ok(Toggled::On)
        }
    }

    async fn is_marked(&self, mark: Mark, user_id: &str, post: PostRef) -> RepoResult<bool> {
        let key = (mark, user_id.to_string(), post);
        Ok(self.state.lock().unwrap().marks.contains(&key))
    }

    async fn count(&self, mark: Mark, post: PostRef) -> RepoResult<i64> {
        let state = self.state.lock().unwrap();
        let count = state
            .marks
            .iter()
            .filter(|(m, _, p)| *m == mark && *p == post)
            .count();
        Ok(count as i64)
    }
}

#[async_trait]
impl VoteRepository for MemoryStore {
    async fn cast_or_retract(
        &self,
        user_id: &str,
        post_id: i64,
        vote: bool,
    ) -> RepoResult<VoteTally> {
        let mut state = self.state.lock().unwrap();
        if !state.ox.contains_key(&post_id) {
            return Err(DomainError::PostNotFound(PostRef::ox(post_id)));
        }
        let key = (user_id.to_string(), post_id);
        let previous = state.votes.remove(&key);
        if previous.is_none() {
            state.votes.insert(key, vote);
        }

        let poll = state
            .ox
            .get_mut(&post_id)
            .ok_or(DomainError::PostNotFound(PostRef::ox(post_id)))?;
        match previous {
            Some(true) => poll.o_count -= 1,
            Some(false) => poll.x_count -= 1,
            None if vote => poll.o_count += 1,
            None => poll.x_count += 1,
        }
        Ok(VoteTally::new(poll.o_count, poll.x_count, previous.is_none()))
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn create(&self, post_id: i64, author: &str, content: &str) -> RepoResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state.qna.contains_key(&post_id) {
            return Err(DomainError::PostNotFound(PostRef::qna(post_id)));
        }
        let comment = Comment {
            id: state.comments.len() as i64 + 1,
            post_id,
            author: author.to_string(),
            author_name: state.name_of(author),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn list_by_post(&self, post_id: i64) -> RepoResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FeedRepository for MemoryStore {
    async fn entries(
        &self,
        kind: PostKind,
        viewer: Option<&str>,
        scope: &FeedScope,
    ) -> RepoResult<Vec<FeedEntry>> {
        let state = self.state.lock().unwrap();
        let in_scope = |post: &Post| match scope {
            FeedScope::All { author } => author.as_deref().map_or(true, |a| post.is_authored_by(a)),
            FeedScope::Following => viewer.is_some_and(|v| {
                state
                    .follows
                    .contains(&(v.to_string(), post.author().to_string()))
            }),
            FeedScope::BookmarkedBy(user) => state
                .marks
                .contains(&(Mark::Bookmark, user.clone(), post.post_ref())),
            FeedScope::Single(id) => post.id() == *id,
        };
        let marked = |mark: Mark, post: PostRef| {
            viewer.is_some_and(|v| state.marks.contains(&(mark, v.to_string(), post)))
        };

        Ok(state
            .posts(kind)
            .into_iter()
            .filter(|p| in_scope(p))
            .map(|p| {
                let post = p.post_ref();
                let like_count = state
                    .marks
                    .iter()
                    .filter(|(m, _, r)| *m == Mark::Like && *r == post)
                    .count() as i64;
                let poll = match &p {
                    Post::Qna(_) => None,
                    Post::Ox(ox) => Some(PollState {
                        o_count: ox.o_count,
                        x_count: ox.x_count,
                        voted: viewer
                            .is_some_and(|v| state.votes.contains_key(&(v.to_string(), ox.id))),
                    }),
                };
                FeedEntry {
                    id: p.id(),
                    kind,
                    author: p.author().to_string(),
                    author_name: state.name_of(p.author()),
                    content: p.content().to_string(),
                    created_at: p.created_at(),
                    liked: marked(Mark::Like, post),
                    like_count,
                    poll,
                }
            })
            .collect())
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn create(
        &self,
        session_id: &str,
        user_id: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let session = Session {
            id: session_id.to_string(),
            user_id: user_id.to_string(),
            expires_at,
            created_at: Utc::now(),
            revoked_at: None,
        };
        self.state
            .lock()
            .unwrap()
            .sessions
            .insert(session.id.clone(), session);
        Ok(())
    }

    async fn find(&self, session_id: &str) -> RepoResult<Option<Session>> {
        Ok(self.state.lock().unwrap().sessions.get(session_id).cloned())
    }

    async fn revoke(&self, session_id: &str) -> RepoResult<bool> {
        let mut state = self.state.lock().unwrap();
        match state.sessions.get_mut(session_id) {
            Some(session) if session.revoked_at.is_none() => {
                session.revoked_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn revoke_all_for_user(&self, user_id: &str) -> RepoResult<u64> {
        let mut state = self.state.lock().unwrap();
        let now = Utc::now();
        let mut revoked = 0;
        for session in state.sessions.values_mut() {
            if session.user_id == user_id && session.revoked_at.is_none() {
                session.revoked_at = Some(now);
                revoked += 1;
            }
        }
        Ok(revoked)
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn upload(&self, _bytes: &[u8], desired_name: &str) -> AppResult<String> {
        let key = object_key(desired_name, Utc::now());
        self.state.lock().unwrap().uploads.push(key.clone());
        Ok(format!("/uploads/{key}"))
    }
}
