//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use qna_core::entities::{
    Comment, FeedEntry, Post, Profile, User, UserSearchHit, UserSummary,
};
use qna_core::value_objects::VoteTally;

use super::responses::{
    CommentResponse, FeedEntryResponse, FollowUserResponse, PostResponse, ProfileResponse,
    SearchUserResponse, UserResponse, VoteResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.name.clone(),
            country: user.country.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            user_id: profile.user.id,
            username: profile.user.name,
            country: profile.user.country,
            follower_count: profile.follower_count,
            following_count: profile.following_count,
        }
    }
}

impl From<UserSummary> for FollowUserResponse {
    fn from(user: UserSummary) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
        }
    }
}

impl From<UserSearchHit> for SearchUserResponse {
    fn from(hit: UserSearchHit) -> Self {
        Self {
            id: hit.id,
            name: hit.name,
            followed: hit.followed,
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        match post {
            Post::Qna(p) => Self {
                id: p.id,
                post_type: post.kind(),
                author: p.author.clone(),
                content: p.content.clone(),
                created_at: p.created_at,
                updated_at: p.updated_at,
                o_count: None,
                x_count: None,
            },
            Post::Ox(p) => Self {
                id: p.id,
                post_type: post.kind(),
                author: p.author.clone(),
                content: p.content.clone(),
                created_at: p.created_at,
                updated_at: p.updated_at,
                o_count: Some(p.o_count),
                x_count: Some(p.x_count),
            },
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

impl From<FeedEntry> for FeedEntryResponse {
    fn from(entry: FeedEntry) -> Self {
        let poll = entry.poll;
        Self {
            id: entry.id,
            post_type: entry.kind,
            author: entry.author,
            author_name: entry.author_name,
            content: entry.content,
            created_at: entry.created_at,
            liked: entry.liked,
            like_count: entry.like_count,
            o_count: poll.map(|p| p.o_count),
            x_count: poll.map(|p| p.x_count),
            voted: poll.map(|p| p.voted),
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            author: comment.author,
            author_name: comment.author_name,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

// ============================================================================
// Engagement Mappers
// ============================================================================

impl From<VoteTally> for VoteResponse {
    fn from(tally: VoteTally) -> Self {
        Self {
            o_count: tally.o_count,
            x_count: tally.x_count,
            voted: tally.voted,
        }
    }
}
