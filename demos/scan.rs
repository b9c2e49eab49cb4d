use prefixset::trie::TrieString;

fn main() {
    // Build a trie of the loan numbers we know about
    let mut numbers = TrieString::new();
    for number in [
        "148908433",
        "283133290",
        "1050450",
        "754243590",
        "098248459",
        "012948569",
    ] {
        numbers.insert(number.chars());
    }

    let email = "Hello, I want to enquire for my Loan Number 1050450. \
                 My complaint is that something isn't working. Bla Bla Bla.";
    println!("email: {email}");

    // Strip punctuation, split into a bag of words and scan each word
    // against the trie. Only a full match counts, so "105045" or
    // "10504500" would not be reported.
    let stripped: String = email
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '?' | '!'))
        .collect();
    match stripped.split(' ').find(|word| numbers.contains(word.chars())) {
        Some(word) => println!("the loan number is: {word}"),
        None => println!("no loan number found in the text"),
    }
}
