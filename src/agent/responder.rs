use rand::seq::SliceRandom;

pub trait ResponseSelector: Send + Sync {
    fn select<'a>(&self, options: &[&'a str]) -> &'a str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl ResponseSelector for RandomSelector {
    fn select<'a>(&self, options: &[&'a str]) -> &'a str {
        options.choose(&mut rand::thread_rng()).copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSelector;

impl ResponseSelector for FirstSelector {
    fn select<'a>(&self, options: &[&'a str]) -> &'a str {
        options.first().copied().unwrap_or_default()
    }
}
