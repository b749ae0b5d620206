use glossa_types::{DictionaryData, Sense};
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Parse the HTML entry fragment embedded in a dictionary search response.
///
/// Returns `None` only when the entry root cannot be located. Every field
/// below the root degrades on its own: a missing frequency marker, a missing
/// audio sample, or an unreadable homonym group never fails the document.
pub fn parse_entry_markup(markup: &str) -> Option<DictionaryData> {
    let document = Html::parse_fragment(markup);

    // Top level div wraps a second div holding all word information.
    let div = selector("div")?;
    let container = document.select(&div).next()?;
    let entry = container.select(&div).next()?;

    // The word itself, frequency marker, and pronunciation sit in the
    // entry's leading span.
    let top = entry.select(&selector("span")?).next();

    let frequency = top.and_then(frequency_of);
    let (audio_url, transcription) = top.map(pronunciation_of).unwrap_or((None, None));

    let senses = entry
        .select(&selector("div.hom")?)
        .filter_map(parse_homonym)
        .collect();

    Some(DictionaryData {
        frequency,
        audio_url,
        transcription,
        senses,
    })
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// Frequency is drawn as three dot slots ("●○○"); the filled count is the
/// ordinal, 1 to 3. No marker means no frequency data.
fn frequency_of(top: ElementRef) -> Option<u8> {
    let marker = top.select(&selector("span.lbfreq")?).next()?;
    let text: String = marker.text().collect();
    Some(text.chars().filter(|c| *c == '●').count() as u8)
}

/// Pull the audio sample URL out of the pronunciation span, then read the
/// remaining text as the transcription. The audio element carries fallback
/// text for browsers, which must not leak into the transcription, so its
/// subtree is skipped when collecting text.
fn pronunciation_of(top: ElementRef) -> (Option<String>, Option<String>) {
    let Some(pron_selector) = selector("span.pron") else {
        return (None, None);
    };
    let Some(pron) = top.select(&pron_selector).next() else {
        return (None, None);
    };

    let audio_url = selector("audio source")
        .and_then(|s| pron.select(&s).next())
        .and_then(|source| source.value().attr("src"))
        .map(str::to_owned);

    let mut transcription = String::new();
    collect_text_skipping(pron, "audio", &mut transcription);
    let transcription = (!transcription.is_empty()).then_some(transcription);

    (audio_url, transcription)
}

fn collect_text_skipping(el: ElementRef, skip: &str, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if element.name() == skip => {}
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text_skipping(child_el, skip, out);
                }
            }
            _ => {}
        }
    }
}

/// One homonym group: part of speech, definition, examples, and usage tags.
/// A group missing any of those is skipped entirely.
fn parse_homonym(hom: ElementRef) -> Option<Sense> {
    let sense = hom.select(&selector("div.sense")?).next()?;

    let part_of_speech: String = hom
        .select(&selector("span.gramGrp")?)
        .next()?
        .text()
        .collect();

    let definition: String = sense.select(&selector("span.def")?).next()?.text().collect();

    let examples = sense
        .select(&selector("span.quote")?)
        .map(|quote| quote.text().collect())
        .collect();

    // A label's first child is a bracket glyph; the payload is the second
    // child node.
    let tags = sense
        .select(&selector("span.lbl")?)
        .map(|label| label.children().nth(1).and_then(node_text))
        .collect::<Option<Vec<String>>>()?;

    Some(Sense {
        part_of_speech,
        definition,
        examples,
        tags,
    })
}

fn node_text(node: NodeRef<'_, Node>) -> Option<String> {
    match node.value() {
        Node::Text(text) => Some(text.to_string()),
        Node::Element(_) => ElementRef::wrap(node).map(|el| el.text().collect()),
        _ => None,
    }
}
