pub mod displayable;
