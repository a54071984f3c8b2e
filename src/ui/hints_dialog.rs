pub const HINTS_HEADING: &str = "Help / Information";

const HINT_INSTRUCTIONS: &str = "Each round, pick one of the colours on offer. Every colour \
is worth a different number of points and your score for the round is the value of the colour \
you picked. The best colour in a round sets that round's highest possible score.\n\n\
To see how you are going overall, click the 'Stats' button.";

pub struct HintsDialog;

impl HintsDialog {
    pub fn lines() -> Vec<String> {
        vec![HINTS_HEADING.to_string(), HINT_INSTRUCTIONS.to_string()]
    }
}
