//! Prompt assembly for the generative-language API.
//!
//! The generation prompt walks the five UPS steps in form order, one `label: value` line per
//! field, so the model sees empty fields as empty rather than missing. When no reapplication
//! area was entered the prompt asks the model to propose some (the "phantom group" rule).

use crate::project::ProjectData;
use std::fmt::Write;
use tracing::debug;

/// Role and ground rules for the report writer.
pub const SYSTEM_INSTRUCTION: &str = "Du bist ein erfahrener Lean-Management-Coach und \
Experte für das UPS Framework (Universal Problem Solving). Deine Aufgabe ist es, aus rohen \
Projektdaten ein prägnantes, professionelles A3 Summary zu erstellen.

Regeln:
- Schreibe auf Deutsch, sachlich und präzise.
- Erfinde keine Zahlen oder Fakten, die nicht in den Daten stehen.
- Achte auf den \"Golden Thread\": Problem, Grundursache, Maßnahmen und Ergebnisse müssen \
logisch aufeinander aufbauen.
- Halte dich exakt an das vorgegebene Markdown-Format.";

/// Markdown skeleton the model is asked to fill.
pub const OUTPUT_TEMPLATE: &str = "# A3 Summary: [Projekttitel]

**Team:** [Teamname]
**Business Impact:** [Business Impact]

---

## 1. Problem Statement

> [Problem Statement in einem Satz]

| Was | Wo | Wann | Wer | Wie viel |
| --- | --- | --- | --- | --- |
| [Was] | [Wo] | [Wann] | [Wer] | [Wie viel] |

## 2. Root Cause

* **Warum 1:** [...]
* **Warum 2:** [...]
* **Warum 3:** [...]
* **Warum 4:** [...]
* **Warum 5:** [...]

**True Root Cause:** [Grundursache]
**Verifikation:** [Wie wurde die Ursache bestätigt]

## 3. Countermeasures

| Nr. | Maßnahme | Verantwortlich | Termin | Status |
| --- | --- | --- | --- | --- |
| 1 | [...] | [...] | [...] | [...] |

## 4. Sustain Results

* **Validierung:** [...]
* **Vorher/Nachher:** [...]
* **Standardisierung:** [...]
* **Follow-up:** [...]

## 5. Reapplication

| Bereich | Kontakt | Status |
| --- | --- | --- |
| [...] | [...] | [...] |

---

**Golden Thread:** [Ein Satz, der Problem, Ursache, Maßnahme und Ergebnis verbindet]";

/// Instruction sent together with an uploaded document.
pub const EXTRACTION_PROMPT: &str = "Analysiere das angehängte Dokument (z.B. eine \
Gap-Analyse oder ein bestehendes A3) und extrahiere alle Informationen für ein UPS A3 Summary.

Antworte AUSSCHLIESSLICH mit einem JSON-Objekt in einem ```json Codeblock mit genau diesen \
Schlüsseln (leere Zeichenkette, wenn nichts gefunden wurde):

{
  \"projectTitle\": \"\",
  \"teamName\": \"\",
  \"businessImpact\": \"\",
  \"largeVagueProblem\": \"\",
  \"what\": \"\",
  \"where\": \"\",
  \"when\": \"\",
  \"who\": \"\",
  \"which\": \"\",
  \"how\": \"\",
  \"howMuch\": \"\",
  \"problemStatement\": \"\",
  \"ishikawaMensch\": \"\",
  \"ishikawaMaschine\": \"\",
  \"ishikawaMethode\": \"\",
  \"ishikawaMaterial\": \"\",
  \"ishikawaUmgebung\": \"\",
  \"why1\": \"\",
  \"why2\": \"\",
  \"why3\": \"\",
  \"why4\": \"\",
  \"why5\": \"\",
  \"rootCause\": \"\",
  \"verification\": \"\",
  \"validation\": \"\",
  \"beforeAfter\": \"\",
  \"standardization\": \"\",
  \"followUp\": \"\",
  \"countermeasures\": [{\"action\": \"\", \"responsible\": \"\", \"dueDate\": \"\", \"status\": \"\"}],
  \"reapplicationAreas\": [{\"area\": \"\", \"contact\": \"\", \"status\": \"\"}]
}

Erfinde keine Inhalte. Übernimm Texte möglichst wörtlich.";

const GOLDEN_THREAD: &str = "Fülle alle Platzhalter mit den bereitgestellten Daten aus und \
stelle sicher, dass der \"Golden Thread\" konsistent ist.";

fn phantom_group_rule(problem_statement: &str) -> String {
    format!(
        "PHANTOM GRUPPE 6 REGEL:
Da keine Reapplication-Bereiche angegeben sind, MUSST du die Reapplication Matrix selbst generieren.
Basierend auf dem Problem \"{problem_statement}\", erstelle 2-3 logische Vorschläge für ähnliche Bereiche im Unternehmen.

Beispiele:
- Wenn Problem an \"Maschine 17\" -> Vorschlag: \"Maschine 18, 19\"
- Wenn Problem in \"Produktionslinie A\" -> Vorschlag: \"Produktionslinie B, C\"
- Wenn Problem in \"Schicht 1\" -> Vorschlag: \"Schicht 2, Wochenendschicht\"
"
    )
}

/// The full prompt for generating an A3 summary from form data.
pub fn build_generation_prompt(data: &ProjectData) -> String {
    let mut prompt = String::with_capacity(4096);
    // Writing to a String cannot fail.
    let _ = write_generation_prompt(&mut prompt, data);
    debug!(
        chars = prompt.chars().count(),
        countermeasures = data.countermeasures.len(),
        phantom_group = !data.has_reapplication_areas(),
        "assembled generation prompt"
    );
    prompt
}

fn write_generation_prompt(out: &mut String, data: &ProjectData) -> std::fmt::Result {
    writeln!(out, "{SYSTEM_INSTRUCTION}\n")?;
    writeln!(
        out,
        "Input-Daten (Kontext): Hier sind die rohen Projektdaten, die du verarbeiten musst:\n"
    )?;
    writeln!(out, "Projekt/Business Case: {}\n", data.business_impact)?;

    writeln!(out, "Step 1 - Problem Statement (aus 6W-2H):")?;
    writeln!(out, "- Was: {}", data.what)?;
    writeln!(out, "- Wo (ON THE FLOOR): {}", data.location)?;
    writeln!(out, "- Wann: {}", data.when)?;
    writeln!(out, "- Wer: {}", data.who)?;
    writeln!(out, "- Welches Muster: {}", data.which)?;
    writeln!(out, "- Wie: {}", data.how)?;
    writeln!(out, "- Wie viel: {}", data.how_much)?;
    writeln!(out, "Problem Statement: {}\n", data.problem_statement)?;

    writeln!(out, "Step 2 - Root Cause (aus 5-Why/Ishikawa):")?;
    writeln!(out, "Ishikawa Kategorien:")?;
    writeln!(out, "- Mensch: {}", data.ishikawa_mensch)?;
    writeln!(out, "- Maschine: {}", data.ishikawa_maschine)?;
    writeln!(out, "- Methode: {}", data.ishikawa_methode)?;
    writeln!(out, "- Material: {}", data.ishikawa_material)?;
    writeln!(out, "- Umgebung: {}", data.ishikawa_umgebung)?;
    writeln!(out, "5-Why Kette:")?;
    for (i, why) in data.whys().iter().enumerate() {
        writeln!(out, "{}. {why}", i + 1)?;
    }
    writeln!(out, "True Root Cause: {}", data.root_cause)?;
    writeln!(out, "Verifikation: {}\n", data.verification)?;

    writeln!(out, "Step 3 - Countermeasures (Action Plan):")?;
    for (i, cm) in data.countermeasures.iter().enumerate() {
        writeln!(
            out,
            "{}. {} | Verantwortlich: {} | Status: {}",
            i + 1,
            cm.action,
            cm.responsible,
            cm.status
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Step 4 - Sustain Results (Check):")?;
    writeln!(out, "Validierung: {}", data.validation)?;
    writeln!(out, "Vorher/Nachher: {}", data.before_after)?;
    writeln!(out, "Standardisierung: {}", data.standardization)?;
    writeln!(out, "Follow-up: {}\n", data.follow_up)?;

    writeln!(out, "Step 5 - Reapplication Potential:")?;
    if data.has_reapplication_areas() {
        for (i, ra) in data.reapplication_areas.iter().enumerate() {
            writeln!(
                out,
                "{}. {} | Kontakt: {} | Status: {}",
                i + 1,
                ra.area,
                ra.contact,
                ra.status
            )?;
        }
    } else {
        out.push_str(&phantom_group_rule(&data.problem_statement));
    }
    writeln!(out)?;

    writeln!(
        out,
        "Output-Format: Generiere den Output exakt im folgenden Markdown-Format:\n"
    )?;
    out.push_str(OUTPUT_TEMPLATE);
    write!(out, "\n\n{GOLDEN_THREAD}")
}
