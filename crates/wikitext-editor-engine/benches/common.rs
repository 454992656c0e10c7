// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_article(sections: usize) -> String {
    let section = "== Section ==\n\
        '''Subject''' is a [[Topic|topic]] in {{Lang|en|English}}.<ref name=\"a\">Source</ref>\n\
        * First [[Point]]\n\
        ** Nested ''point'' with <sub>x</sub>\n\
        # Step [[File:x.png|thumb|Caption [[Inner]]]]\n\
        <!-- editor note -->\n\
        Plain paragraph text that carries no markup at all.\n\n";
    section.repeat(sections)
}
