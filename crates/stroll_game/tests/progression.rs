//! Full-campaign progression tests against the shipped content

use stroll_game::{new_session, GameBackend};
use stroll_math::Vec3;
use stroll_stage::{ActiveGate, StageState};

const FRAME: f32 = 0.016;

fn started_session(seed: u64) -> GameBackend {
    let mut session = new_session(seed).expect("shipped content must assemble");
    session.start().unwrap();
    session.set_captured(true);
    session
}

/// Warp onto each collectible of the current stage in turn, one frame per
/// pickup, stopping at the stage boundary
fn collect_stage(session: &mut GameBackend) {
    let stage = session.current_stage().to_string();
    while session.current_stage() == stage {
        let Some(item) = session.collectibles().items().first() else {
            return;
        };
        let base = item.base;
        session.warp_player(Vec3::new(base.x, base.y, base.z));
        session.frame(FRAME).unwrap();
    }
}

/// Warp-and-pick until the collected count reaches `count`
fn collect_exactly(session: &mut GameBackend, count: u32) {
    while session.collected() < count {
        let base = session.collectibles().items()[0].base;
        session.warp_player(Vec3::new(base.x, base.y, base.z));
        session.frame(FRAME).unwrap();
    }
}

#[test]
fn forest_completion_triggers_exactly_one_transition() {
    let mut session = started_session(101);
    assert_eq!(session.current_stage(), "forest");
    assert_eq!(session.presenter().hud_text(), "Blossom Grove | 0/10 | 0:00");
    assert_eq!(session.collectibles().remaining(), 10);

    collect_stage(&mut session);

    assert_eq!(session.current_stage(), "night_street");
    assert_eq!(session.state(), StageState::Active);
    assert_eq!(session.controller().history(), &["forest", "night_street"]);
    // HUD already shows the successor's fresh count
    assert_eq!(session.presenter().hud_text(), "Night Street | 0/12 | 0:00");
    assert_eq!(
        session.builder().visible_scenes(),
        vec!["night_street".to_string()]
    );
    assert_eq!(session.audio().current(), Some("crickets"));

    // Idle ticks after the crossing must not fan out more transitions
    for _ in 0..60 {
        session.frame(FRAME).unwrap();
    }
    assert_eq!(session.controller().history(), &["forest", "night_street"]);
}

#[test]
fn night_street_holds_for_the_lantern_show() {
    let mut session = started_session(102);
    collect_stage(&mut session);
    assert_eq!(session.current_stage(), "night_street");

    collect_stage(&mut session);
    assert_eq!(session.current_stage(), "night_street");
    assert_eq!(session.state(), StageState::GateCheck);
    let Some(ActiveGate::Show { swarm, .. }) = session.controller().active_gate() else {
        panic!("expected the lantern show to be running");
    };
    assert!(!swarm.is_spent());

    // The show blocks the transition but not the frame loop
    session.frame(FRAME).unwrap();
    assert_eq!(session.current_stage(), "night_street");

    // Sit through the 12 second show
    for _ in 0..800 {
        session.frame(FRAME).unwrap();
    }
    assert_eq!(session.current_stage(), "beach");
    assert_eq!(session.state(), StageState::Active);
    assert_eq!(session.audio().current(), Some("surf"));
}

#[test]
fn beach_quiz_gates_the_finale() {
    let mut session = started_session(103);
    collect_stage(&mut session);
    for _ in 0..800 {
        session.frame(FRAME).unwrap();
    }
    collect_stage(&mut session);
    assert_eq!(session.current_stage(), "beach");

    collect_stage(&mut session);
    assert_eq!(session.state(), StageState::GateCheck);
    let quiz = session.presenter().open_quiz().expect("quiz visible").clone();
    assert_eq!(quiz.options.len(), 3);

    // Wrong answers retry with no penalty
    assert!(!session.answer_quiz(0).unwrap());
    assert!(!session.answer_quiz(1).unwrap());
    assert_eq!(session.current_stage(), "beach");
    assert_eq!(session.collected(), 13);
    assert!(session.presenter().open_quiz().is_some());

    // The right answer finishes the campaign
    assert!(session.answer_quiz(2).unwrap());
    assert_eq!(session.state(), StageState::Complete);
    let modal = session.presenter().open_modal().expect("terminal modal");
    assert_eq!(modal.action_label, "Replay");

    // Replay winds everything back to the grove
    session.replay().unwrap();
    assert_eq!(session.current_stage(), "forest");
    assert_eq!(session.state(), StageState::Active);
    assert_eq!(session.presenter().hud_text(), "Blossom Grove | 0/10 | 0:00");
    assert_eq!(session.collectibles().remaining(), 10);
}

#[test]
fn encounters_run_in_threshold_order_one_at_a_time() {
    let mut session = started_session(104);

    // Race past both thresholds (3 and 6) without finishing the stage
    collect_exactly(&mut session, 8);
    assert!(session.collected() >= 8 && session.collected() < 10);

    let active = session.encounters().active().expect("cat vignette active");
    assert_eq!(active.script().id, "grove_cat");
    assert_eq!(
        session
            .encounters()
            .encounters()
            .iter()
            .filter(|e| e.is_active())
            .count(),
        1
    );

    // Park the player away from the collectibles and let the cat finish
    session.warp_player(Vec3::new(0.0, 0.9, 0.0));
    for _ in 0..10_000 {
        session.frame(FRAME).unwrap();
        if session.encounters().encounters()[0].is_done() {
            break;
        }
    }
    assert!(session.encounters().encounters()[0].is_done());

    // The elder only starts after the cat is gone
    session.frame(FRAME).unwrap();
    let active = session.encounters().active().expect("elder vignette active");
    assert_eq!(active.script().id, "blossom_elder");
}

#[test]
fn capture_loss_freezes_the_stage_clock() {
    let mut session = started_session(105);
    for _ in 0..50 {
        session.frame(FRAME).unwrap();
    }
    let played = session.controller().stage_time();
    assert!(played > 0.0);

    session.set_captured(false);
    for _ in 0..500 {
        session.frame(FRAME).unwrap();
    }
    assert_eq!(session.controller().stage_time(), played);

    session.set_captured(true);
    session.frame(FRAME).unwrap();
    assert!(session.controller().stage_time() > played);
}
