use rand::seq::SliceRandom;

const FAREWELL_TEMPLATES: [&str; 12] = [
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// Flavor text shown when a language is eliminated.
pub trait NarrativeText {
    fn farewell_text(&mut self, language: &str) -> String;
}

impl<F> NarrativeText for F
where
    F: FnMut(&str) -> String,
{
    fn farewell_text(&mut self, language: &str) -> String {
        self(language)
    }
}

/// Picks one of the farewell templates at random.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomFarewell;

impl NarrativeText for RandomFarewell {
    fn farewell_text(&mut self, language: &str) -> String {
        let template = FAREWELL_TEMPLATES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(FAREWELL_TEMPLATES[0]);
        render_template(template, language)
    }
}

fn render_template(template: &str, language: &str) -> String {
    template.replacen("{}", language, 1)
}
