//! Static language -> extensions table.
//!
//! Loaded once at catalog construction. The first extension of each entry is
//! the language's primary extension; the remainder become secondary
//! filetypes named after the extension itself. Compound extensions (more
//! than one dot) are listed here for completeness but are skipped by the
//! catalog because they would break suffix matching.

pub const LANGUAGES: &[(&str, &[&str])] = &[
    ("ABAP", &[".abap"]),
    ("ActionScript", &[".as"]),
    ("Ada", &[".adb", ".ada", ".ads"]),
    ("Apex", &[".cls"]),
    ("AppleScript", &[".applescript", ".scpt"]),
    ("Assembly", &[".asm", ".a51", ".nasm"]),
    ("AutoHotkey", &[".ahk", ".ahkl"]),
    ("Awk", &[".awk", ".auk", ".gawk", ".mawk", ".nawk"]),
    ("Batchfile", &[".bat", ".cmd"]),
    ("C", &[".c", ".cats", ".h", ".idc", ".w"]),
    ("C#", &[".cs", ".cake", ".cshtml", ".csx"]),
    ("C++", &[".cpp", ".c++", ".cc", ".cp", ".cxx", ".h", ".h++", ".hh", ".hpp", ".hxx", ".inl", ".ipp"]),
    ("Clojure", &[".clj", ".boot", ".cl2", ".cljc", ".cljs", ".cljx", ".edn"]),
    ("CMake", &[".cmake", ".cmake.in"]),
    ("CoffeeScript", &[".coffee", "._coffee", ".cjsx", ".iced"]),
    ("ColdFusion", &[".cfm", ".cfml"]),
    ("Common Lisp", &[".lisp", ".asd", ".cl", ".lsp", ".ny"]),
    ("Coq", &[".coq", ".v"]),
    ("Crystal", &[".cr"]),
    ("CSS", &[".css"]),
    ("CSV", &[".csv"]),
    ("Cuda", &[".cu", ".cuh"]),
    ("Cython", &[".pyx", ".pxd", ".pxi"]),
    ("D", &[".d", ".di"]),
    ("Dart", &[".dart"]),
    ("Diff", &[".diff", ".patch"]),
    ("Dockerfile", &[".dockerfile"]),
    ("Eagle", &[".sch", ".brd"]),
    ("Elixir", &[".ex", ".exs"]),
    ("Elm", &[".elm"]),
    ("Emacs Lisp", &[".el", ".emacs", ".emacs.desktop"]),
    ("Erlang", &[".erl", ".es", ".escript", ".hrl", ".xrl", ".yrl"]),
    ("F#", &[".fs", ".fsi", ".fsx"]),
    ("Forth", &[".fth", ".4th", ".forth", ".frt"]),
    ("Fortran", &[".f90", ".f", ".f03", ".f08", ".f77", ".f95", ".for", ".fpp"]),
    ("GLSL", &[".glsl", ".fp", ".frag", ".frg", ".fsh", ".geom", ".glslv", ".vert", ".vrx", ".vsh"]),
    ("Go", &[".go"]),
    ("Gradle", &[".gradle"]),
    ("GraphQL", &[".graphql", ".gql"]),
    ("Groovy", &[".groovy", ".grt", ".gtpl", ".gvy"]),
    ("Haml", &[".haml", ".haml.deface"]),
    ("Handlebars", &[".handlebars", ".hbs"]),
    ("Haskell", &[".hs", ".hsc"]),
    ("HCL", &[".hcl", ".tf", ".tfvars"]),
    ("HTML", &[".html", ".htm", ".html.hl", ".xht", ".xhtml"]),
    ("HTTP", &[".http"]),
    ("INI", &[".ini", ".cfg", ".prefs", ".properties"]),
    ("Java", &[".java"]),
    ("JavaScript", &[".js", "._js", ".bones", ".es6", ".jake", ".jsb", ".jscad", ".jsfl", ".jsm", ".jss", ".mjs", ".njs", ".pac", ".sjs", ".ssjs", ".xsjs", ".xsjslib"]),
    ("JSON", &[".json", ".geojson", ".lock", ".topojson"]),
    ("JSON5", &[".json5"]),
    ("JSONLD", &[".jsonld"]),
    ("JSX", &[".jsx"]),
    ("Julia", &[".jl"]),
    ("Jupyter Notebook", &[".ipynb"]),
    ("Kotlin", &[".kt", ".ktm", ".kts"]),
    ("LaTeX", &[".tex", ".aux", ".bbx", ".bib", ".cbx", ".dtx", ".ins", ".lbx", ".ltx", ".mkii", ".mkiv", ".mkvi", ".sty", ".toc"]),
    ("Less", &[".less"]),
    ("Literate Haskell", &[".lhs"]),
    ("LLVM", &[".ll"]),
    ("Lua", &[".lua", ".nse", ".pd_lua", ".rbxs", ".wlua"]),
    ("Makefile", &[".mak", ".mk", ".mkfile"]),
    ("Markdown", &[".md", ".markdown", ".mkd", ".mkdn", ".mkdown", ".ron"]),
    ("MATLAB", &[".matlab", ".m"]),
    ("Nginx", &[".nginxconf", ".vhost"]),
    ("Nim", &[".nim", ".nimrod"]),
    ("Nix", &[".nix"]),
    ("Objective-C", &[".m", ".h"]),
    ("OCaml", &[".ml", ".eliom", ".eliomi", ".ml4", ".mli", ".mll", ".mly"]),
    ("Pascal", &[".pas", ".dfm", ".dpr", ".lpr", ".pp"]),
    ("Perl", &[".pl", ".al", ".cgi", ".perl", ".ph", ".plx", ".pm", ".pod", ".psgi", ".t"]),
    ("PHP", &[".php", ".aw", ".ctp", ".php3", ".php4", ".php5", ".phps", ".phpt"]),
    ("PLSQL", &[".pls", ".pck", ".pkb", ".pks", ".plb", ".plsql"]),
    ("PowerShell", &[".ps1", ".psd1", ".psm1"]),
    ("Protocol Buffer", &[".proto"]),
    ("Pug", &[".pug", ".jade"]),
    ("Python", &[".py", ".bzl", ".gyp", ".lmi", ".pyde", ".pyp", ".pyt", ".pyw", ".rpy", ".tac", ".wsgi", ".xpy"]),
    ("R", &[".r", ".rd", ".rsx"]),
    ("Raku", &[".raku", ".6pl", ".6pm", ".nqp", ".p6", ".p6l", ".p6m", ".pl6", ".pm6"]),
    ("ReStructuredText", &[".rst", ".rest", ".rest.txt", ".rst.txt"]),
    ("Ruby", &[".rb", ".builder", ".gemspec", ".god", ".irbrc", ".jbuilder", ".mspec", ".podspec", ".rabl", ".rake", ".rbuild", ".rbw", ".rbx", ".ru", ".ruby", ".thor", ".watchr"]),
    ("Rust", &[".rs", ".rs.in"]),
    ("Sass", &[".sass", ".scss"]),
    ("Scala", &[".scala", ".sbt", ".sc"]),
    ("Scheme", &[".scm", ".sld", ".sls", ".sps", ".ss"]),
    ("Shell", &[".sh", ".bash", ".bats", ".command", ".ksh", ".sh.in", ".tmux", ".tool", ".zsh"]),
    ("Smalltalk", &[".st", ".cs"]),
    ("Solidity", &[".sol"]),
    ("SQL", &[".sql", ".cql", ".ddl", ".mysql", ".prc", ".tab", ".udf", ".viw"]),
    ("Svelte", &[".svelte"]),
    ("SVG", &[".svg"]),
    ("Swift", &[".swift"]),
    ("SystemVerilog", &[".sv", ".svh", ".vh"]),
    ("Tcl", &[".tcl", ".adp", ".tm"]),
    ("Terra", &[".tt"]),
    ("Text", &[".txt", ".fr", ".nb", ".ncl", ".no"]),
    ("Thrift", &[".thrift"]),
    ("TOML", &[".toml"]),
    ("TSX", &[".tsx"]),
    ("Twig", &[".twig"]),
    ("TypeScript", &[".ts"]),
    ("Vala", &[".vala", ".vapi"]),
    ("VBScript", &[".vbs"]),
    ("Verilog", &[".veo"]),
    ("VHDL", &[".vhdl", ".vhd", ".vhf", ".vhi", ".vho", ".vhs", ".vht", ".vhw"]),
    ("Vim script", &[".vim"]),
    ("Visual Basic", &[".vb", ".bas", ".frm", ".frx", ".vba", ".vbhtml"]),
    ("Vue", &[".vue"]),
    ("WebAssembly", &[".wat", ".wast"]),
    ("XML", &[".xml", ".ant", ".axml", ".ccxml", ".clixml", ".cproject", ".csl", ".csproj", ".ct", ".dita", ".ditamap", ".ditaval", ".dll.config", ".dotsettings", ".filters", ".fsproj", ".fxml", ".glade", ".gml", ".grxml", ".iml", ".ivy", ".jelly", ".jsproj", ".kml", ".launch", ".mdpolicy", ".mm", ".mod", ".mxml", ".nproj", ".nuspec", ".odd", ".osm", ".plist", ".pluginspec", ".props", ".ps1xml", ".psc1", ".pt", ".rdf", ".rss", ".scxml", ".srdf", ".storyboard", ".stTheme", ".sublime-snippet", ".targets", ".tmCommand", ".tml", ".tmLanguage", ".tmPreferences", ".tmSnippet", ".tmTheme", ".ui", ".urdf", ".ux", ".vbproj", ".vcxproj", ".vssettings", ".vxml", ".wsdl", ".wsf", ".wxi", ".wxl", ".wxs", ".x3d", ".xacro", ".xaml", ".xib", ".xlf", ".xliff", ".xmi", ".xml.dist", ".xproj", ".xsd", ".xul", ".zcml"]),
    ("YAML", &[".yml", ".reek", ".rviz", ".sublime-syntax", ".syntax", ".yaml", ".yaml-tmlanguage"]),
    ("Zig", &[".zig"]),
];
