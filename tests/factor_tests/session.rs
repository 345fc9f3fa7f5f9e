use super::*;

#[test]
fn starts_at_intro() {
  let session = StepSession::new(sample());
  assert_eq!(session.position(), 0);
  assert_eq!(session.len(), 6);
  assert_eq!(session.current().unwrap().kind, StepKind::Intro);
  assert!(!session.is_finished());
}

#[test]
fn full_walkthrough() {
  let mut session = StepSession::new(sample());
  let none = ColumnInputs::default();

  assert_eq!(session.advance(&none).unwrap(), Advance::Moved);
  assert_eq!(session.current().unwrap().kind, StepKind::InputAB);

  let wrong = ColumnInputs::default().with_mid("3", "2");
  assert!(matches!(
    session.advance(&wrong),
    Err(FactorError::InputMismatch { step: 1 })
  ));
  assert_eq!(session.position(), 1);

  let right = ColumnInputs::default()
    .with_left("1", "1")
    .with_mid("2", "3");
  assert_eq!(session.advance(&right).unwrap(), Advance::Moved);
  assert_eq!(session.current().unwrap().kind, StepKind::VerifyXy);

  assert_eq!(session.advance(&none).unwrap(), Advance::Moved);
  assert_eq!(session.current().unwrap().kind, StepKind::InputK);

  let wrong = ColumnInputs::default().with_right("2", "3");
  assert!(session.advance(&wrong).is_err());
  assert_eq!(session.position(), 3);

  let right = ColumnInputs::default().with_right("3", "2");
  assert_eq!(session.advance(&right).unwrap(), Advance::Moved);
  assert_eq!(session.current().unwrap().kind, StepKind::VerifyLinear);

  assert_eq!(session.advance(&none).unwrap(), Advance::Revealed);
  assert_eq!(session.current().unwrap().kind, StepKind::Final);

  assert_eq!(session.advance(&none).unwrap(), Advance::Finished);
  assert!(session.is_finished());
  assert_eq!(session.advance(&none).unwrap(), Advance::Finished);
}

#[test]
fn verify_steps_do_not_check_entries() {
  let mut session = StepSession::new(sample());
  let none = ColumnInputs::default();
  session.advance(&none).unwrap();
  session.advance(&none).unwrap();
  // verify_xy carries expectations for display but is not interactive
  let wrong = ColumnInputs::default().with_left("7", "7");
  assert_eq!(session.advance(&wrong).unwrap(), Advance::Moved);
}
