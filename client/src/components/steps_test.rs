use super::*;

#[test]
fn steps_are_numbered_sequentially() {
    for (i, step) in STEPS.iter().enumerate() {
        assert_eq!(usize::from(step.number), i + 1);
    }
}

#[test]
fn steps_have_nonempty_copy() {
    assert!(!STEPS.is_empty());
    for step in STEPS {
        assert!(!step.title.is_empty());
        assert!(!step.detail.is_empty());
    }
}
