/// Static glossary printed by `--help-tags`, before any network work.
const TAG_HELP: &str = "\
Output column glossary:

  Request     1-based submission order of the request. Rows are sorted
              by this number, not by completion order.
  Status      HTTP status code of the response (429 means rate limited).
  Limit       X-Rate-Limit-Limit header: request cap for the window.
  Remain      X-Rate-Limit-Remaining header: requests left in the window.
  Reset Time  X-Rate-Limit-Reset header rendered as local time
              (N/A when absent, 'Invalid date' when unparsable).
  Period      X-Rate-Limit-Period header: window length in seconds.
  Retry       Retry-After header: seconds to wait before retrying.
  Response    Wall-clock latency of the request in milliseconds.";

pub(crate) fn print_tag_help() {
    println!("{}", TAG_HELP);
}
