pub mod guard;
pub mod language_selector;
pub mod loading;
pub mod pagination;
pub mod skill_card;
pub mod user_dropdown;

#[cfg(test)]
mod guard_test;
