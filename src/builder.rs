//! @ai:module:intent Group scanned landmarks into functions, data blocks, and constraints
//! @ai:module:layer application
//! @ai:module:public_api parse, parse_with
//! @ai:module:depends_on scanner, signature, spec, vocabulary
//! @ai:module:stateless true

use crate::scanner::scan;
use crate::signature::parse_signature;
use crate::spec::{FunctionBlock, LandmarkMatch, ParsedSpec};
use crate::vocabulary::{Vocabulary, CONSTRAINT, DATA, FUNCTION};

/// @ai:intent Parse a document with the default vocabulary
/// @ai:post never fails; a document without landmarks yields an empty ParsedSpec
/// @ai:effects pure
pub fn parse(text: &str) -> ParsedSpec {
    parse_with(text, &Vocabulary::default())
}

/// @ai:intent Parse a document, attaching sub-landmarks named in the given vocabulary
/// @ai:effects pure
pub fn parse_with(text: &str, vocabulary: &Vocabulary) -> ParsedSpec {
    let initial = ParsedSpec {
        raw_text: text.to_string(),
        ..Default::default()
    };

    // The second slot is the index of the function that sub-landmarks attach to.
    let (spec, _) = scan(text)
        .into_iter()
        .fold((initial, None::<usize>), |(mut spec, current), landmark| {
            let current = match landmark.name.as_str() {
                FUNCTION => {
                    spec.functions.push(function_block(landmark));
                    Some(spec.functions.len() - 1)
                }
                DATA => {
                    spec.data_blocks.push(landmark);
                    None
                }
                CONSTRAINT => {
                    spec.constraints.push(landmark);
                    None
                }
                name if vocabulary.is_function_landmark(name) => {
                    if let Some(func) = current.and_then(|idx| spec.functions.get_mut(idx)) {
                        func.landmarks.insert(landmark.name.clone(), landmark);
                    }
                    current
                }
                _ => current,
            };
            (spec, current)
        });

    tracing::debug!(
        functions = spec.functions.len(),
        data_blocks = spec.data_blocks.len(),
        constraints = spec.constraints.len(),
        "built parsed spec"
    );

    spec
}

/// @ai:intent Build a FunctionBlock from a FUNCTION landmark
/// @ai:effects pure
fn function_block(landmark: LandmarkMatch) -> FunctionBlock {
    let signature = parse_signature(&landmark.content);

    FunctionBlock {
        signature: signature.line,
        name: signature.name,
        inputs: signature.inputs,
        return_type: signature.return_type,
        landmarks: Default::default(),
        line_number: landmark.line_number,
    }
}
