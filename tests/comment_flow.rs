use comment_board::{
    AppError, AppState, CommentService, Config, CreateCommentRequest, IdentityProvider, Reaction,
    ReactionRequest, Result, SortOrder, UserProfile, ROOT_TARGET,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("comment_board=debug")
        .try_init();
}

struct StubIdentity {
    profile: UserProfile,
}

impl StubIdentity {
    fn new(name: &str) -> Self {
        Self {
            profile: UserProfile {
                display_name: name.to_string(),
                email: format!("{}@example.com", name),
                avatar_url: Some(format!("https://example.com/{}.png", name)),
            },
        }
    }
}

impl IdentityProvider for StubIdentity {
    fn current_user(&self) -> Result<UserProfile> {
        Ok(self.profile.clone())
    }
}

struct SignedOut;

impl IdentityProvider for SignedOut {
    fn current_user(&self) -> Result<UserProfile> {
        Err(AppError::identity_unavailable("no active session"))
    }
}

fn post(text: &str, target_id: u64) -> CreateCommentRequest {
    CreateCommentRequest {
        text: text.to_string(),
        target_id,
        reply_to: None,
    }
}

const SEED: &str = r#"[
    {
        "id": 1,
        "parent_comment": "",
        "user_name": "maria",
        "user_image": "https://example.com/maria.png",
        "comment_text": "Great article, <b>thanks</b> for sharing!",
        "timestamp": "2024-03-01T10:00:00Z",
        "smile_count": 3,
        "like_count": 1,
        "dislike_count": 0,
        "replies": [
            {
                "id": 2,
                "parent_comment": "maria",
                "user_name": "dev",
                "user_image": "",
                "comment_text": "Agreed!",
                "timestamp": "2024-03-01T11:00:00Z",
                "replies": []
            }
        ]
    },
    {
        "id": 3,
        "user_name": "sam",
        "comment_text": "I have a question about the second part.",
        "timestamp": "2024-03-02T09:30:00Z",
        "smile_count": 5
    }
]"#;

fn seeded_state() -> AppState {
    let comments = CommentService::from_json(SEED.as_bytes()).unwrap();
    AppState::with_comments(Config::default(), comments)
}

#[test]
fn reply_then_react_then_sort() {
    init_logging();
    let mut state = seeded_state();
    let alice = StubIdentity::new("alice");

    // Reply under the nested comment
    let mut request = post("Same here.", 2);
    request.reply_to = Some("dev".to_string());
    let new_id = state.post_comment(&alice, request).unwrap();
    assert_eq!(new_id, 4);

    let nested = &state.comments()[0].replies[0];
    assert_eq!(nested.id, 2);
    assert_eq!(nested.replies.len(), 1);
    assert_eq!(nested.replies[0].parent_comment, "dev");
    assert_eq!(nested.replies[0].user_name, "alice");

    // React on the new comment; nothing else moves
    let count = state
        .react(ReactionRequest {
            reaction: Reaction::Like,
            target_id: new_id,
        })
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(state.comments()[0].like_count, 1); // from the seed, unchanged

    // Popular sort puts the 5-smile root first, replies stay put
    state.sort_comments(SortOrder::Popular);
    assert_eq!(state.sort_order(), Some(SortOrder::Popular));
    let top_ids: Vec<u64> = state.comments().iter().map(|c| c.id).collect();
    assert_eq!(top_ids, vec![3, 1]);
    assert_eq!(state.comments()[1].replies[0].id, 2);
}

#[test]
fn latest_sort_puts_newest_root_first() {
    let mut state = seeded_state();
    state.sort_comments(SortOrder::Latest);
    let top_ids: Vec<u64> = state.comments().iter().map(|c| c.id).collect();
    assert_eq!(top_ids, vec![3, 1]);
}

#[test]
fn failed_identity_abandons_the_post() {
    init_logging();
    let mut state = seeded_state();
    let before: Vec<_> = state.comments().to_vec();

    let err = state.post_comment(&SignedOut, post("should never land", 1)).unwrap_err();
    assert!(matches!(err, AppError::IdentityUnavailable(_)));
    assert_eq!(state.comments(), &before[..]);
}

#[test]
fn empty_text_is_rejected_before_identity_lookup() {
    let mut state = seeded_state();
    let err = state.post_comment(&SignedOut, post("   ", 1)).unwrap_err();
    // Validation fires first, so the signed-out provider is never consulted
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn unknown_target_returns_not_found() {
    let mut state = seeded_state();
    let alice = StubIdentity::new("alice");

    let err = state.post_comment(&alice, post("orphan", 42)).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(state.comment_count(), 2);

    let err = state
        .react(ReactionRequest {
            reaction: Reaction::Smile,
            target_id: 42,
        })
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn paging_through_a_long_thread() {
    let mut state = seeded_state();
    let alice = StubIdentity::new("alice");

    // Grow to ten top-level comments
    for i in 0..8 {
        state
            .post_comment(&alice, post(&format!("thread starter {}", i), ROOT_TARGET))
            .unwrap();
    }
    assert_eq!(state.comment_count(), 10);
    assert_eq!(state.total_pages(), 2);

    assert_eq!(state.visible_comments().len(), 8);
    state.next_page();
    assert_eq!(state.current_page(), 2);
    assert_eq!(state.visible_comments().len(), 2);

    // Clamped at the last page
    state.next_page();
    assert_eq!(state.current_page(), 2);

    state.previous_page();
    assert_eq!(state.current_page(), 1);
    state.previous_page();
    assert_eq!(state.current_page(), 1);

    // Jumping past the end shows an empty window, not an error
    state.go_to_page(9);
    assert!(state.visible_comments().is_empty());

    // A new root lengthens the thread; the same page now has content
    state.go_to_page(2);
    state
        .post_comment(&alice, post("eleventh", ROOT_TARGET))
        .unwrap();
    assert_eq!(state.visible_comments().len(), 3);
}

#[test]
fn raised_length_limit_is_honored() {
    let comments = CommentService::from_json(SEED.as_bytes()).unwrap();
    let config = Config {
        max_comment_length: 20000,
        ..Config::default()
    };
    let mut state = AppState::with_comments(config, comments);
    let alice = StubIdentity::new("alice");

    // Longer than the old hardcoded 10000 cap, within the configured one
    let long = "x".repeat(15000);
    state.post_comment(&alice, post(&long, ROOT_TARGET)).unwrap();

    let err = state
        .post_comment(&alice, post(&"x".repeat(20001), ROOT_TARGET))
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn default_length_limit_still_applies() {
    let mut state = seeded_state();
    let alice = StubIdentity::new("alice");
    let err = state
        .post_comment(&alice, post(&"x".repeat(10001), ROOT_TARGET))
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn seed_with_duplicate_ids_is_rejected() {
    let raw = r#"[
        {"id": 1, "user_name": "a", "comment_text": "x", "timestamp": "2024-03-01T10:00:00Z"},
        {"id": 1, "user_name": "b", "comment_text": "y", "timestamp": "2024-03-01T11:00:00Z"}
    ]"#;
    let err = CommentService::from_json(raw.as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn new_ids_continue_above_the_seed() {
    let mut state = seeded_state();
    let alice = StubIdentity::new("alice");
    let id = state
        .post_comment(&alice, post("fresh", ROOT_TARGET))
        .unwrap();
    assert_eq!(id, 4);
    assert!(state.comments().iter().all(|c| c.id != 0));
}
