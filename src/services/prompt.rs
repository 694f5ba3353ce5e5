//! The fixed prompt pair sent to the completion API.
//!
//! The system instruction pins the assistant to a sober German clinical
//! register; the user instruction embeds the caller's notes verbatim.

pub const SYSTEM_PROMPT: &str = "Du bist ein deutscher medizinischer Dokumentationsassistent. \
Du erhältst stichwortartige Notizen einer Ärztin (internistische/ intensivmedizinische Visite) \
und sollst daraus einen gut formulierten, knappen, fachlich korrekten Text erzeugen. \
Schreibe in vollständigen deutschen Sätzen, in einem nüchternen klinischen Stil, \
geeignet für den Abschnitt 'Verlauf' oder 'Beurteilung/Empfehlung' in einem Arztbrief. \
Keine Patientennamen, keine Identifikationsdaten, keine Spekulationen. \
Falls unklar, bleibe allgemein. Länge: typischerweise 3–7 Sätze.";

/// Build the user instruction around the raw notes, untouched.
pub fn user_prompt(notes: &str) -> String {
    format!(
        "Stichworte der Visite / Anamnese:\n{}\n\nErzeuge bitte einen passenden Textvorschlag auf Deutsch.",
        notes
    )
}
