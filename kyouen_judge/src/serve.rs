use std::io::{BufRead, Write};

use kyouen::{check_kyouen, find_kyouen, Request, Response, Stage};
use tracing::{debug, trace};

/// Computes the response to a single request.
///
/// Returns `None` for [`Request::Bye`].
pub fn respond(req: &Request) -> Option<Response> {
    let response = match req {
        Request::Check { stage } => match check_kyouen(stage) {
            Ok(kyouen) => Response::Verdict {
                kyouen: kyouen.is_some(),
                shape: kyouen.map(|k| k.shape),
            },
            Err(err) => Response::Error {
                message: err.to_string(),
            },
        },
        Request::Find { stage } => match stage.parse::<Stage>() {
            Ok(stage) => match find_kyouen(stage.stones()) {
                Some(kyouen) => Response::Found {
                    stones: kyouen.stones,
                    shape: kyouen.shape,
                },
                None => Response::NotFound,
            },
            Err(err) => Response::Error {
                message: err.to_string(),
            },
        },
        Request::Bye => return None,
    };
    Some(response)
}

/// Answers requests, one JSON object per line, until EOF or [`Request::Bye`].
///
/// Lines that are not a valid request get a [`Response::Error`]; only IO
/// failures end the session with an error. Returns the number of requests
/// that were answered.
pub fn serve(mut input: impl BufRead, mut output: impl Write) -> anyhow::Result<usize> {
    let mut buf = String::new();
    let mut num_answered = 0;

    loop {
        buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = input.read_line(&mut buf)?;
        if num_bytes_read == 0 {
            debug!(num_answered, "Input closed");
            break;
        }
        let line = buf.trim_end();
        if line.is_empty() {
            continue;
        }
        trace!(name: "Received request", request = %line);

        let response = match serde_json::from_str::<Request>(line) {
            Ok(req) => match respond(&req) {
                Some(response) => response,
                None => {
                    debug!(num_answered, "Session ended by client");
                    break;
                }
            },
            Err(err) => Response::Error {
                message: format!("Invalid request: {}", err),
            },
        };

        let response_json = serde_json::to_string(&response)?;
        trace!(name: "Sending response", response = %response_json);
        writeln!(output, "{}", response_json)?;
        output.flush()?;
        num_answered += 1;
    }
    Ok(num_answered)
}
