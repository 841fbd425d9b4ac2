pub mod d100_onboarding;
