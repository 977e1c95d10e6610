//! Property tests over the reaction/bookmark state machine: whatever the
//! interleaving, counts stay consistent and the bookmark copy never
//! diverges from the feed copy.

use proptest::prelude::*;

use commons_app::views::BoardsState;
use commons_core::{BoardId, PostDraft, ReactionKind, TimeStamp};

#[derive(Debug, Clone, Copy)]
enum Action {
    React(ReactionKind),
    ToggleBookmark,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(ReactionKind::ALL.to_vec()).prop_map(Action::React),
        Just(Action::ToggleBookmark),
    ]
}

proptest! {
    #[test]
    fn any_interleaving_keeps_copies_equal(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let mut boards = BoardsState::new();
        let id = boards
            .create_post(
                BoardId::Batch,
                PostDraft {
                    title: "prop".to_string(),
                    content: "test".to_string(),
                    batch: None,
                    images: Vec::new(),
                },
                TimeStamp::from_millis(1_718_000_000_000),
            )
            .expect("hosted board");

        for action in actions {
            match action {
                Action::React(kind) => {
                    boards.toggle_reaction(&id, kind);
                }
                Action::ToggleBookmark => {
                    boards.toggle_bookmark(&id);
                }
            }

            let post = boards.find(&id).expect("post is never deleted here");

            // single viewer: the selected kind counts one, everything else zero
            for kind in ReactionKind::ALL {
                let expected = u32::from(post.viewer_reaction == Some(kind));
                prop_assert_eq!(post.reactions.get(kind), expected);
            }

            // membership tracks the flag, and the copies agree exactly
            match boards.find_bookmarked(&id) {
                Some(copy) => {
                    prop_assert!(post.is_bookmarked);
                    prop_assert_eq!(copy, post);
                }
                None => prop_assert!(!post.is_bookmarked),
            }
        }
    }

    #[test]
    fn double_toggle_is_a_net_no_op(kind in prop::sample::select(ReactionKind::ALL.to_vec())) {
        let mut boards = BoardsState::new();
        let id = boards
            .create_post(
                BoardId::Music,
                PostDraft::default(),
                TimeStamp::from_millis(1_718_000_000_000),
            )
            .expect("hosted board");

        let before = boards.find(&id).expect("present").clone();
        boards.toggle_reaction(&id, kind);
        boards.toggle_reaction(&id, kind);
        let after = boards.find(&id).expect("present");
        prop_assert_eq!(&before, after);
    }
}
