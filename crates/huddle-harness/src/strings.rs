//! Localisation table used by simulations.

use std::collections::HashMap;

/// Table with the stock chat templates and settings tab titles.
///
/// `Chat_All` and `Chat_Team` carry the colour markup and trailing carriage
/// return the shipped resource files have.
pub fn standard_strings() -> HashMap<String, String> {
    [
        ("Chat_All", "\u{3}%s1\u{1} :  %s2\r"),
        ("Chat_Team", "\u{3}(TEAM) %s1\u{1} :  %s2\r"),
        ("Game_connected", "%s connected\n"),
        ("Game_disconnected", "%s left the game (%s)\n"),
        ("Game_over", "#Game_over_text"),
        ("Game_over_text", "Run complete\n"),
        ("MOM_Settings_Tab_Controls", "Controls"),
        ("MOM_Settings_Tab_HUD", "HUD"),
        ("MOM_Settings_Tab_Comparisons", "Comparisons"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_owned(), value.to_owned()))
    .collect()
}
